//! Schema-constrained generation.
//!
//! One JSON-mode driver call followed by the extract -> parse -> conform
//! sequence. Conformance runs before anything reaches a renderer, so a
//! partially-shaped model reply degrades to template defaults instead of
//! failing downstream.

use crate::conform::conform_to_template;
use crate::extract::{extract_json, parse_json_object};
use crate::settings::GenerationSettings;
use ghostwriter_core::{GenerateRequest, Message, ResponseFormat};
use ghostwriter_error::{GenerationError, GenerationErrorKind, GhostwriterResult};
use ghostwriter_interface::GhostwriterDriver;
use serde_json::Value;
use tracing::{debug, instrument};

/// Request a JSON completion and conform it to the template.
///
/// # Errors
///
/// `GenerationFailed` when the driver call fails or returns empty text;
/// `AnalysisParseFailed` (extract/parse/shape kinds) when the reply does
/// not contain a JSON object.
#[instrument(skip_all, fields(provider = %driver.name()))]
pub async fn generate_structured<D: GhostwriterDriver>(
    driver: &D,
    settings: &GenerationSettings,
    messages: Vec<Message>,
    template: &Value,
) -> GhostwriterResult<Value> {
    let request = GenerateRequest::builder()
        .messages(messages)
        .model(settings.model().clone())
        .temperature(*settings.temperature())
        .max_tokens(*settings.max_tokens())
        .response_format(ResponseFormat::Json)
        .build()
        .map_err(|e| GenerationError::new(GenerationErrorKind::InvalidRequest(e.to_string())))?;

    let response = driver.generate(&request).await?;
    if response.text().trim().is_empty() {
        return Err(GenerationError::new(GenerationErrorKind::EmptyCompletion).into());
    }

    let payload = extract_json(response.text())?;
    let parsed = parse_json_object(&payload)?;
    let conformed = conform_to_template(template, &parsed);

    debug!(bytes = payload.len(), "Structured completion conformed");
    Ok(conformed)
}
