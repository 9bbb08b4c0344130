//! Axum HTTP surface for Ghostwriter.
//!
//! Routes, session extraction, error to status mapping, and the layered
//! service configuration. Handlers sequence orchestration before
//! persistence; stores, clients, and the session verifier are injected
//! through [`AppState`].

mod auth;
mod blocking;
mod config;
mod dto;
mod error;
mod handlers;
#[cfg(feature = "metrics")]
mod metrics;
mod router;
mod state;

pub use auth::{AuthenticatedUser, Claims, SessionVerifier};
pub use blocking::run_blocking;
pub use config::{
    AuthSection, DatabaseSection, GenerationSection, GhostwriterConfig, ImageSection,
    ServerSection,
};
pub use dto::{
    ContentItemResponse, CreateContentRequest, ListQuery, PersonalityRequest, PersonalityResponse,
    ProfilePatchRequest, ProfileResponse, UpdateContentRequest, WritingHistoryEntryResponse,
    WritingRequest, WritingResponse,
};
pub use error::{ApiError, ApiResult};
pub use router::create_router;
pub use state::AppState;
