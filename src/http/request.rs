use std::fmt;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// HTTP request methods.
///
/// Only `GET` is ever served; the rest are recognized so they can be logged
/// by name before being answered with 404.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    GET,
    POST,
    PUT,
    DELETE,
    HEAD,
    OPTIONS,
    PATCH,
    /// Any token that is not one of the known verbs, kept verbatim.
    Other(String),
}

impl Method {
    /// Parses an HTTP method token. Matching is case-sensitive.
    ///
    /// ```
    /// # use lanternd::http::request::Method;
    /// assert_eq!(Method::parse("GET"), Method::GET);
    /// assert_eq!(Method::parse("get"), Method::Other("get".to_string()));
    /// ```
    pub fn parse(s: &str) -> Self {
        match s {
            "GET" => Method::GET,
            "POST" => Method::POST,
            "PUT" => Method::PUT,
            "DELETE" => Method::DELETE,
            "HEAD" => Method::HEAD,
            "OPTIONS" => Method::OPTIONS,
            "PATCH" => Method::PATCH,
            other => Method::Other(other.to_string()),
        }
    }
}

/// The method and target of an HTTP request line.
///
/// Anything after the target (usually the protocol version) is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    pub method: Method,
    pub target: String,
}

impl RequestLine {
    /// Splits `line` on single spaces. Returns `None` when there are fewer
    /// than two tokens.
    pub fn parse(line: &str) -> Option<Self> {
        let mut parts = line.split(' ');
        let method = parts.next()?;
        let target = parts.next()?;

        Some(Self {
            method: Method::parse(method),
            target: target.to_string(),
        })
    }
}

#[derive(Debug)]
pub enum RequestError {
    /// The stream ended before the blank line closing the header block.
    Incomplete,
    /// The header block was terminated before any request line arrived.
    Empty,
    Io(std::io::Error),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::Incomplete => f.write_str("connection closed before end of request header"),
            RequestError::Empty => f.write_str("empty request"),
            RequestError::Io(e) => write!(f, "request read failed: {}", e),
        }
    }
}

impl std::error::Error for RequestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RequestError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RequestError {
    fn from(e: std::io::Error) -> Self {
        RequestError::Io(e)
    }
}

/// Reads lines up to and including the first empty one and returns the
/// first line, with its line terminator removed.
///
/// Header lines are consumed and discarded. Bytes that are not valid UTF-8
/// are replaced rather than rejected.
pub async fn read_request_head<R>(reader: &mut R) -> Result<String, RequestError>
where
    R: AsyncBufRead + Unpin,
{
    let mut first: Option<String> = None;
    let mut buf = Vec::with_capacity(256);

    loop {
        buf.clear();
        let n = reader.read_until(b'\n', &mut buf).await?;
        if n == 0 {
            return Err(RequestError::Incomplete);
        }

        let line = String::from_utf8_lossy(trim_line_ending(&buf));
        tracing::debug!(line = %line, "request line read");

        if line.is_empty() {
            break;
        }

        if first.is_none() {
            first = Some(line.into_owned());
        }
    }

    first.ok_or(RequestError::Empty)
}

fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reads_first_line_and_skips_headers() {
        let mut input: &[u8] = b"GET /a.html HTTP/1.1\r\nHost: x\r\nAccept: */*\r\n\r\n";
        let line = read_request_head(&mut input).await.unwrap();
        assert_eq!(line, "GET /a.html HTTP/1.1");
    }

    #[test]
    fn trims_crlf_and_lf() {
        assert_eq!(trim_line_ending(b"abc\r\n"), b"abc");
        assert_eq!(trim_line_ending(b"abc\n"), b"abc");
        assert_eq!(trim_line_ending(b"abc"), b"abc");
    }
}
