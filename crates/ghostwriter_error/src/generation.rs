//! Generation error types for the external completion service.

/// Generation error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GenerationErrorKind {
    /// HTTP transport failure
    Http(String),
    /// The provider returned a non-success status
    Api {
        /// HTTP status code returned by the provider
        status: u16,
        /// Error body or status text
        message: String,
    },
    /// The provider returned a completion with no usable text
    EmptyCompletion,
    /// The provider response could not be deserialized
    ResponseParsing(String),
    /// The request was rejected before being sent
    InvalidRequest(String),
}

impl std::fmt::Display for GenerationErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationErrorKind::Http(msg) => write!(f, "HTTP error: {}", msg),
            GenerationErrorKind::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            GenerationErrorKind::EmptyCompletion => {
                write!(f, "Provider returned an empty completion")
            }
            GenerationErrorKind::ResponseParsing(msg) => {
                write!(f, "Response parsing error: {}", msg)
            }
            GenerationErrorKind::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
        }
    }
}

/// Generation error with source location tracking.
///
/// # Examples
///
/// ```
/// use ghostwriter_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::EmptyCompletion);
/// assert!(format!("{}", err).contains("empty completion"));
/// ```
#[derive(Debug, Clone)]
pub struct GenerationError {
    /// The kind of error that occurred
    pub kind: GenerationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for GenerationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Generation Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for GenerationError {}
