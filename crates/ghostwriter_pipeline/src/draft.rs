//! Free-text draft generation.

use crate::prompt::draft_messages;
use crate::settings::GenerationSettings;
use ghostwriter_core::{ContentKind, GenerateRequest, ResponseFormat};
use ghostwriter_error::{ContentError, ContentErrorKind, GhostwriterResult};
use ghostwriter_interface::GhostwriterDriver;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// Parameters for one draft generation.
#[derive(Debug, Clone, derive_getters::Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct DraftRequest {
    /// What kind of artifact to write
    kind: ContentKind,
    /// Title embedded in the prompt and stored with the item
    title: String,
    /// The user's free-text prompt
    prompt: String,
    /// Open styling map (tone, style, emotion, length, format, ...)
    #[builder(default)]
    parameters: BTreeMap<String, Value>,
}

impl DraftRequest {
    /// Returns a builder for constructing a DraftRequest.
    pub fn builder() -> DraftRequestBuilder {
        DraftRequestBuilder::default()
    }
}

/// Orchestrates prompt composition and free-text completion.
///
/// Generation never touches a store; persistence is the caller's step,
/// taken only after this succeeds.
#[derive(Debug, Clone)]
pub struct DraftGenerator<D> {
    driver: D,
    settings: GenerationSettings,
}

impl<D: GhostwriterDriver> DraftGenerator<D> {
    /// Creates a generator over the given driver.
    pub fn new(driver: D, settings: GenerationSettings) -> Self {
        Self { driver, settings }
    }

    /// Generate draft text for the request.
    ///
    /// Returns the completion text unchanged; an empty completion is a
    /// generation failure, never a silent empty success.
    ///
    /// # Errors
    ///
    /// `InvalidInput` for an empty title or prompt; `GenerationFailed`
    /// when the driver call fails or returns empty text.
    #[instrument(skip(self, request), fields(kind = %request.kind(), provider = %self.driver.name()))]
    pub async fn generate_draft(&self, request: &DraftRequest) -> GhostwriterResult<String> {
        if request.title().trim().is_empty() {
            return Err(invalid("title must not be empty"));
        }
        if request.prompt().trim().is_empty() {
            return Err(invalid("prompt must not be empty"));
        }

        let messages = draft_messages(
            *request.kind(),
            request.title(),
            request.prompt(),
            request.parameters(),
        );

        let generate = GenerateRequest::builder()
            .messages(messages)
            .model(self.settings.model().clone())
            .temperature(*self.settings.temperature())
            .max_tokens(*self.settings.max_tokens())
            .response_format(ResponseFormat::Text)
            .build()
            .map_err(|e| {
                ghostwriter_error::GenerationError::new(
                    ghostwriter_error::GenerationErrorKind::InvalidRequest(e.to_string()),
                )
            })?;

        let response = self.driver.generate(&generate).await?;
        let text = response.text().trim();
        if text.is_empty() {
            return Err(ghostwriter_error::GenerationError::new(
                ghostwriter_error::GenerationErrorKind::EmptyCompletion,
            )
            .into());
        }

        debug!(chars = text.len(), "Draft generated");
        Ok(text.to_string())
    }
}

fn invalid(msg: &str) -> ghostwriter_error::GhostwriterError {
    ContentError::new(ContentErrorKind::InvalidInput(msg.to_string())).into()
}
