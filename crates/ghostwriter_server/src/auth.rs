//! Session verification.
//!
//! Sessions are issued elsewhere; this service only verifies them. A
//! request carries `Authorization: Bearer <jwt>` signed HS256 with the
//! shared session secret.

use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use ghostwriter_error::{AuthError, AuthErrorKind};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims carried by a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: Uuid,
    /// Expiry, seconds since epoch
    pub exp: i64,
    /// Issued-at, seconds since epoch
    pub iat: i64,
}

/// Verifies bearer tokens against the shared session secret.
#[derive(Clone)]
pub struct SessionVerifier {
    decoding: DecodingKey,
    validation: Validation,
}

impl SessionVerifier {
    /// Creates a verifier for the given HS256 secret.
    pub fn new(secret: &str) -> Self {
        Self {
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    /// Verify a token and return its claims.
    ///
    /// # Errors
    ///
    /// `ExpiredToken` for an out-of-date token, `InvalidToken` for
    /// anything else that fails validation.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AuthError::new(AuthErrorKind::ExpiredToken)
                }
                _ => AuthError::new(AuthErrorKind::InvalidToken),
            })
    }
}

impl std::fmt::Debug for SessionVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionVerifier").finish_non_exhaustive()
    }
}

/// The authenticated caller, extracted from the bearer token.
///
/// Handlers that take this parameter reject unauthenticated requests with
/// 401 before running.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    /// Verified user id
    pub id: Uuid,
}

#[axum::async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AuthError::new(AuthErrorKind::MissingToken))?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AuthError::new(AuthErrorKind::InvalidToken))?;

        let claims = state.sessions.verify(token)?;
        Ok(AuthenticatedUser { id: claims.sub })
    }
}
