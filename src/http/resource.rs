//! Maps a request line onto something the server can answer with.

use std::path::{Path, PathBuf};

use crate::http::request::{Method, RequestLine};
use crate::http::response::StatusCode;

/// Outcome of resolving a request target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedResource {
    /// An existing path that is not a directory.
    File(PathBuf),
    /// The target was exactly `/` and nothing on disk answered it.
    DefaultPage,
    NotFound,
}

impl ResolvedResource {
    /// The response status. Both the status line and the body are chosen
    /// from the same resolved value.
    pub fn status(&self) -> StatusCode {
        match self {
            ResolvedResource::File(_) | ResolvedResource::DefaultPage => StatusCode::Ok,
            ResolvedResource::NotFound => StatusCode::NotFound,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            ResolvedResource::File(path) => Some(path.as_path()),
            _ => None,
        }
    }
}

/// Resolves a request against the document `root`.
///
/// Only `GET` requests can resolve to anything other than `NotFound`. The
/// target's leading `/` is stripped and the remainder joined onto `root`
/// without any normalization.
pub async fn resolve(root: &Path, request: Option<&RequestLine>) -> ResolvedResource {
    let Some(request) = request else {
        return ResolvedResource::NotFound;
    };

    if request.method != Method::GET {
        return ResolvedResource::NotFound;
    }

    let relative = request.target.strip_prefix('/').unwrap_or(&request.target);
    let path = root.join(relative);

    if !relative.is_empty() && is_regular(&path).await {
        ResolvedResource::File(path)
    } else if request.target == "/" {
        ResolvedResource::DefaultPage
    } else {
        ResolvedResource::NotFound
    }
}

async fn is_regular(path: &Path) -> bool {
    match tokio::fs::metadata(path).await {
        Ok(meta) => !meta.is_dir(),
        Err(_) => false,
    }
}
