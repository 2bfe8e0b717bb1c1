//! HTTP protocol handling.
//!
//! Every connection carries exactly one request and one response, after
//! which the server closes it.
//!
//! - **`connection`**: drives one request/response cycle over a stream
//! - **`request`**: reads the header block and parses the request line
//! - **`resource`**: resolves a request target to a file, the default page, or nothing
//! - **`mime`**: content types from file extensions
//! - **`response`**: status codes and the response header block
//! - **`writer`**: writes response bodies, templating HTML on the way out
//! - **`template`**: `<cs371date>` / `<cs371server>` marker substitution
//!
//! ```text
//!   read head ──▶ parse line ──▶ resolve ──▶ classify ──▶ write head ──▶ write body ──▶ close
//!       │
//!       └─ EOF / I/O error: close without responding
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use lanternd::config::SiteConfig;
//! use lanternd::http::connection::Connection;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let listener = TcpListener::bind("127.0.0.1:8080").await?;
//!     let config = Arc::new(SiteConfig::default());
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let config = config.clone();
//!         tokio::spawn(async move {
//!             if let Err(e) = Connection::new(socket, config).run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod connection;
pub mod mime;
pub mod request;
pub mod resource;
pub mod response;
pub mod template;
pub mod writer;
