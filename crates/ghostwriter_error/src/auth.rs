//! Session authentication error types.

/// Authentication error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AuthErrorKind {
    /// No bearer token was supplied
    MissingToken,
    /// The token failed signature or claim validation
    InvalidToken,
    /// The token was valid but has expired
    ExpiredToken,
}

impl std::fmt::Display for AuthErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthErrorKind::MissingToken => write!(f, "Missing authentication token"),
            AuthErrorKind::InvalidToken => write!(f, "Invalid authentication token"),
            AuthErrorKind::ExpiredToken => write!(f, "Authentication token expired"),
        }
    }
}

/// Authentication error with source location tracking.
#[derive(Debug, Clone)]
pub struct AuthError {
    /// The kind of error that occurred
    pub kind: AuthErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl AuthError {
    /// Create a new AuthError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: AuthErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Auth Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for AuthError {}
