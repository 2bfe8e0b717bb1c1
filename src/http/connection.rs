use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt, BufReader, BufWriter};

use crate::config::SiteConfig;
use crate::http::mime::classify;
use crate::http::request::{read_request_head, RequestLine};
use crate::http::resource::resolve;
use crate::http::response::ResponseHead;
use crate::http::template::Template;
use crate::http::writer::ResponseWriter;

/// One client connection, answered with exactly one response.
pub struct Connection<S> {
    stream: BufReader<S>,
    config: Arc<SiteConfig>,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, config: Arc<SiteConfig>) -> Self {
        Self {
            stream: BufReader::new(stream),
            config,
        }
    }

    /// Reads the request, writes the response, and closes the stream.
    ///
    /// If the request cannot be read nothing is written. The stream is
    /// dropped on every path.
    pub async fn run(mut self) -> anyhow::Result<()> {
        let line = read_request_head(&mut self.stream)
            .await
            .context("reading request")?;

        let request = RequestLine::parse(&line);
        let resource = resolve(&self.config.root, request.as_ref()).await;
        let status = resource.status();
        let content_type = classify(&resource);

        tracing::info!(
            request_target = request.as_ref().map(|r| r.target.as_str()).unwrap_or(""),
            path = ?resource.path(),
            status = status.as_u16(),
            content_type = content_type.mime_str(),
            "Serving request"
        );

        let head = ResponseHead::new(status, content_type, self.config.server_header.as_str());
        let template = Template::today(self.config.template_server_name.as_str());
        let writer = ResponseWriter::new(&resource, content_type, &template);

        let mut out = BufWriter::new(self.stream.get_mut());
        writer.write_head(&head, &mut out).await?;
        writer.write_body(&mut out).await?;
        out.flush().await?;
        out.shutdown().await?;

        Ok(())
    }
}
