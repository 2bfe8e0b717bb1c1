use std::path::Path;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use crate::http::mime::ContentType;
use crate::http::resource::ResolvedResource;
use crate::http::response::ResponseHead;
use crate::http::template::Template;

pub const NOT_FOUND_PAGE: &str = "<html><head><title>404 Not Found</title></head><body>\n\
<h3>404 Not Found</h3>\n\
</body></html>\n";

pub const WELCOME_PAGE: &str = "<html><head><title>Welcome</title></head><body>\n\
<h3>My web server works!</h3>\n\
</body></html>\n";

const HTML_OPEN: &str = "<html><head><title>Welcome</title></head><body>\n";
const HTML_CLOSE: &str = "</body></html>\n";

/// Writes one response onto a stream.
pub struct ResponseWriter<'a> {
    resource: &'a ResolvedResource,
    content_type: ContentType,
    template: &'a Template,
}

impl<'a> ResponseWriter<'a> {
    pub fn new(
        resource: &'a ResolvedResource,
        content_type: ContentType,
        template: &'a Template,
    ) -> Self {
        Self {
            resource,
            content_type,
            template,
        }
    }

    pub async fn write_head<W>(&self, head: &ResponseHead, stream: &mut W) -> anyhow::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        stream
            .write_all(&head.to_bytes())
            .await
            .context("writing response head")
    }

    /// Writes the body for the resolved resource.
    ///
    /// A file that cannot be read here fails the whole response; whatever
    /// was written before stays written.
    pub async fn write_body<W>(&self, stream: &mut W) -> anyhow::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        match self.resource {
            ResolvedResource::NotFound => stream.write_all(NOT_FOUND_PAGE.as_bytes()).await?,
            ResolvedResource::DefaultPage => stream.write_all(WELCOME_PAGE.as_bytes()).await?,
            ResolvedResource::File(path) if self.content_type.is_binary() => {
                let bytes = tokio::fs::read(path)
                    .await
                    .with_context(|| format!("reading {}", path.display()))?;
                stream.write_all(&bytes).await?;
            }
            ResolvedResource::File(path) => self.write_html(path, stream).await?,
        }

        Ok(())
    }

    async fn write_html<W>(&self, path: &Path, stream: &mut W) -> anyhow::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        let file = tokio::fs::File::open(path)
            .await
            .with_context(|| format!("opening {}", path.display()))?;
        let mut reader = BufReader::new(file);

        stream.write_all(HTML_OPEN.as_bytes()).await?;

        let mut line = Vec::with_capacity(256);
        loop {
            line.clear();
            let n = reader
                .read_until(b'\n', &mut line)
                .await
                .with_context(|| format!("reading {}", path.display()))?;
            if n == 0 {
                break;
            }

            // Lines that are not UTF-8 cannot hold a marker we could match
            // safely, so they pass through untouched.
            match std::str::from_utf8(&line) {
                Ok(text) => stream.write_all(self.template.apply(text).as_bytes()).await?,
                Err(_) => stream.write_all(&line).await?,
            }
        }

        stream.write_all(HTML_CLOSE.as_bytes()).await?;
        Ok(())
    }
}
