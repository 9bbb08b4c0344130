//! Shared application state.

use crate::auth::SessionVerifier;
use ghostwriter_database::{ContentStore, ProfileStore};
use ghostwriter_interface::{GhostwriterDriver, ImageProvider};
use ghostwriter_pipeline::GenerationSettings;
use std::sync::Arc;

/// Everything the handlers need, constructed once at startup and cloned
/// per request. Explicit dependency injection: there is no global store,
/// client, or connection anywhere in the service.
#[derive(Clone)]
pub struct AppState {
    /// Content library store
    pub content: ContentStore,
    /// Profile and history store
    pub profiles: ProfileStore,
    /// Completion backend
    pub driver: Arc<dyn GhostwriterDriver>,
    /// Image search backend
    pub images: Arc<dyn ImageProvider>,
    /// Session token verifier
    pub sessions: SessionVerifier,
    /// Sampling settings applied to every generation
    pub generation: GenerationSettings,
}
