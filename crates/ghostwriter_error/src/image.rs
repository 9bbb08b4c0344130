//! Image search error types.
//!
//! Image errors are always recovered locally with a fallback URL; they are
//! logged but never surface to end users.

/// Image search error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ImageErrorKind {
    /// HTTP transport failure
    Http(String),
    /// The provider returned a non-success status
    Api {
        /// HTTP status code returned by the provider
        status: u16,
        /// Error body or status text
        message: String,
    },
    /// The provider response could not be deserialized
    ResponseParsing(String),
    /// The search returned no results
    NoResults,
}

impl std::fmt::Display for ImageErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageErrorKind::Http(msg) => write!(f, "HTTP error: {}", msg),
            ImageErrorKind::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            ImageErrorKind::ResponseParsing(msg) => write!(f, "Response parsing error: {}", msg),
            ImageErrorKind::NoResults => write!(f, "No images matched the query"),
        }
    }
}

/// Image error with source location tracking.
#[derive(Debug, Clone)]
pub struct ImageError {
    /// The kind of error that occurred
    pub kind: ImageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ImageError {
    /// Create a new ImageError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ImageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for ImageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Image Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for ImageError {}
