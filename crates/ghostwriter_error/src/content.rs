//! Content store error types.

/// Content error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContentErrorKind {
    /// A required field was missing or empty
    InvalidInput(String),
    /// The requested content kind is not recognized
    InvalidKind(String),
    /// Another item with the same title already exists for this author
    Duplicate {
        /// Title of the conflicting item
        title: String,
    },
    /// The item does not exist or belongs to another user.
    ///
    /// The two cases are collapsed deliberately so the API never leaks
    /// whether an id exists.
    NotFoundOrUnauthorized,
}

impl std::fmt::Display for ContentErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentErrorKind::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            ContentErrorKind::InvalidKind(kind) => {
                write!(f, "Unknown content kind '{}'", kind)
            }
            ContentErrorKind::Duplicate { title } => {
                write!(f, "Content titled '{}' already exists", title)
            }
            ContentErrorKind::NotFoundOrUnauthorized => {
                write!(f, "Content not found")
            }
        }
    }
}

/// Content error with source location tracking.
///
/// # Examples
///
/// ```
/// use ghostwriter_error::{ContentError, ContentErrorKind};
///
/// let err = ContentError::new(ContentErrorKind::NotFoundOrUnauthorized);
/// assert!(format!("{}", err).contains("not found"));
/// ```
#[derive(Debug, Clone)]
pub struct ContentError {
    /// The kind of error that occurred
    pub kind: ContentErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ContentError {
    /// Create a new ContentError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ContentErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for ContentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Content Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for ContentError {}
