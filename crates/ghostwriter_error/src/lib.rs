//! Error types for the Ghostwriter content service.
//!
//! Each domain gets its own error struct with a `Kind` enum and automatic
//! source-location capture; the crate-level [`GhostwriterError`] wraps any
//! of them behind a boxed kind so `?` works across crate boundaries.

mod analysis;
mod auth;
mod config;
mod content;
mod database;
mod generation;
mod image;

pub use analysis::{AnalysisError, AnalysisErrorKind};
pub use auth::{AuthError, AuthErrorKind};
pub use config::ConfigError;
pub use content::{ContentError, ContentErrorKind};
pub use database::{DatabaseError, DatabaseErrorKind};
pub use generation::{GenerationError, GenerationErrorKind};
pub use image::{ImageError, ImageErrorKind};

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum GhostwriterErrorKind {
    /// Analysis pipeline error (non-conforming model reply or bad input)
    Analysis(AnalysisError),
    /// Session authentication error
    Auth(AuthError),
    /// Configuration error
    Config(ConfigError),
    /// Content store error
    Content(ContentError),
    /// Database error
    Database(DatabaseError),
    /// External completion service error
    Generation(GenerationError),
    /// Image search error
    Image(ImageError),
}

impl std::fmt::Display for GhostwriterErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GhostwriterErrorKind::Analysis(e) => write!(f, "{}", e),
            GhostwriterErrorKind::Auth(e) => write!(f, "{}", e),
            GhostwriterErrorKind::Config(e) => write!(f, "{}", e),
            GhostwriterErrorKind::Content(e) => write!(f, "{}", e),
            GhostwriterErrorKind::Database(e) => write!(f, "{}", e),
            GhostwriterErrorKind::Generation(e) => write!(f, "{}", e),
            GhostwriterErrorKind::Image(e) => write!(f, "{}", e),
        }
    }
}

/// Ghostwriter error with kind discrimination.
///
/// The kind is boxed so the error stays one pointer wide on the happy path.
#[derive(Debug)]
pub struct GhostwriterError(Box<GhostwriterErrorKind>);

impl GhostwriterError {
    /// Create a new error from a kind.
    pub fn new(kind: GhostwriterErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &GhostwriterErrorKind {
        &self.0
    }
}

impl std::fmt::Display for GhostwriterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ghostwriter Error: {}", self.0)
    }
}

impl std::error::Error for GhostwriterError {}

// Generic From implementation for any type that converts to GhostwriterErrorKind
impl<T> From<T> for GhostwriterError
where
    T: Into<GhostwriterErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Ghostwriter operations.
pub type GhostwriterResult<T> = std::result::Result<T, GhostwriterError>;
