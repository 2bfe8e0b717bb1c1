use bytes::{BufMut, BytesMut};
use chrono::Utc;

use crate::http::mime::ContentType;

const HTTP_VERSION: &str = "HTTP/1.1";

/// HTTP status codes the server answers with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 404 Not Found
    NotFound,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// ```
    /// # use lanternd::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
        }
    }

    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "Not Found",
        }
    }
}

/// Status line and headers of a response.
///
/// There is no `Content-Length`: every response is `Connection: close` and
/// the body ends when the connection does.
#[derive(Debug, Clone)]
pub struct ResponseHead {
    pub status: StatusCode,
    pub content_type: ContentType,
    pub date: String,
    pub server: String,
}

impl ResponseHead {
    /// Creates a head stamped with the current time.
    pub fn new(status: StatusCode, content_type: ContentType, server: impl Into<String>) -> Self {
        Self {
            status,
            content_type,
            date: http_date(),
            server: server.into(),
        }
    }

    /// Serializes the head, including the blank line that ends it.
    pub fn to_bytes(&self) -> BytesMut {
        let mut buf = BytesMut::with_capacity(256);

        let status_line = format!(
            "{} {} {}\r\n",
            HTTP_VERSION,
            self.status.as_u16(),
            self.status.reason_phrase()
        );
        buf.put_slice(status_line.as_bytes());

        for (k, v) in [
            ("Date", self.date.as_str()),
            ("Server", self.server.as_str()),
            ("Connection", "close"),
            ("Content-Type", self.content_type.mime_str()),
        ] {
            buf.put_slice(k.as_bytes());
            buf.put_slice(b": ");
            buf.put_slice(v.as_bytes());
            buf.put_slice(b"\r\n");
        }

        // Header/body separator
        buf.put_slice(b"\r\n");

        buf
    }
}

/// Current time in IMF-fixdate form, e.g. `Sun, 06 Nov 1994 08:49:37 GMT`.
pub fn http_date() -> String {
    Utc::now().format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}
