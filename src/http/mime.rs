use crate::http::resource::ResolvedResource;

/// Content types the server knows how to label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Html,
    Gif,
    Jpeg,
    Png,
}

impl ContentType {
    pub fn mime_str(&self) -> &'static str {
        match self {
            ContentType::Html => "text/html",
            ContentType::Gif => "image/gif",
            ContentType::Jpeg => "image/jpeg",
            ContentType::Png => "image/png",
        }
    }

    /// Binary types are written byte for byte, never templated.
    pub fn is_binary(&self) -> bool {
        !matches!(self, ContentType::Html)
    }

    /// Case-sensitive suffix match on a file name. Unknown suffixes are HTML.
    pub fn from_file_name(name: &str) -> Self {
        if name.ends_with(".gif") {
            ContentType::Gif
        } else if name.ends_with(".jpg") || name.ends_with(".jpeg") {
            ContentType::Jpeg
        } else if name.ends_with(".png") {
            ContentType::Png
        } else {
            ContentType::Html
        }
    }
}

/// Picks the content type for a resolved resource. Performs no I/O.
pub fn classify(resource: &ResolvedResource) -> ContentType {
    match resource {
        ResolvedResource::File(path) => path
            .file_name()
            .map(|name| ContentType::from_file_name(&name.to_string_lossy()))
            .unwrap_or(ContentType::Html),
        ResolvedResource::DefaultPage | ResolvedResource::NotFound => ContentType::Html,
    }
}
