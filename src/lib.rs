//! Lantern - a minimal single-host HTTP/1.1 file server.
//!
//! Serves files relative to a document root, one request per connection.

pub mod config;
pub mod http;
pub mod server;
