//! Error to HTTP response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use ghostwriter_error::{
    AnalysisErrorKind, AuthErrorKind, ContentErrorKind, GhostwriterError, GhostwriterErrorKind,
};
use serde_json::json;

/// A handler failure, carried as the workspace error and mapped to a
/// status, machine-readable code, and short message at response time.
///
/// Internals are logged, never leaked: 5xx responses carry a generic
/// message while the full error goes to the log.
#[derive(Debug)]
pub struct ApiError(GhostwriterError);

impl ApiError {
    /// The underlying error.
    pub fn inner(&self) -> &GhostwriterError {
        &self.0
    }

    /// Status, code, and user-facing message for this error.
    pub fn parts(&self) -> (StatusCode, &'static str, String) {
        match self.0.kind() {
            GhostwriterErrorKind::Auth(e) => {
                let code = match e.kind {
                    AuthErrorKind::MissingToken => "missing_token",
                    AuthErrorKind::InvalidToken => "invalid_token",
                    AuthErrorKind::ExpiredToken => "expired_token",
                };
                (StatusCode::UNAUTHORIZED, code, e.kind.to_string())
            }
            GhostwriterErrorKind::Content(e) => match &e.kind {
                ContentErrorKind::InvalidInput(_) | ContentErrorKind::InvalidKind(_) => {
                    (StatusCode::BAD_REQUEST, "invalid_input", e.kind.to_string())
                }
                // Existence and authorization are indistinguishable on
                // purpose, so foreign ids never leak.
                ContentErrorKind::NotFoundOrUnauthorized => (
                    StatusCode::NOT_FOUND,
                    "not_found",
                    "Content not found".to_string(),
                ),
                ContentErrorKind::Duplicate { .. } => (
                    StatusCode::CONFLICT,
                    "duplicate_content",
                    e.kind.to_string(),
                ),
            },
            GhostwriterErrorKind::Analysis(e) => match &e.kind {
                AnalysisErrorKind::InvalidInput(_) => {
                    (StatusCode::BAD_REQUEST, "invalid_input", e.kind.to_string())
                }
                _ => (
                    StatusCode::BAD_GATEWAY,
                    "analysis_parse_failed",
                    "The analysis service returned an unusable response".to_string(),
                ),
            },
            GhostwriterErrorKind::Generation(_) => (
                StatusCode::BAD_GATEWAY,
                "generation_failed",
                "Content generation failed".to_string(),
            ),
            GhostwriterErrorKind::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "persistence_failed",
                "Failed to save changes".to_string(),
            ),
            // Image failures are recovered with fallbacks before reaching
            // a response; anything that still lands here is internal.
            GhostwriterErrorKind::Image(_) | GhostwriterErrorKind::Config(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "Internal server error".to_string(),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        if status.is_server_error() {
            tracing::error!(error = %self.0, code, "Request failed");
        } else {
            tracing::warn!(error = %self.0, code, "Request rejected");
        }

        let body = Json(json!({
            "error": { "code": code, "message": message }
        }));
        (status, body).into_response()
    }
}

impl<T> From<T> for ApiError
where
    T: Into<GhostwriterError>,
{
    fn from(err: T) -> Self {
        Self(err.into())
    }
}

/// Result alias for handlers.
pub type ApiResult<T> = Result<T, ApiError>;
