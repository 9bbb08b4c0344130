//! Writing-sample analysis.

use crate::prompt::writing_messages;
use crate::render::render_writing;
use crate::settings::GenerationSettings;
use crate::structured::generate_structured;
use crate::template::writing_template;
use ghostwriter_core::WritingMetrics;
use ghostwriter_error::{AnalysisError, AnalysisErrorKind, GhostwriterResult};
use ghostwriter_interface::GhostwriterDriver;
use serde_json::Value;
use tracing::instrument;

/// Everything a successful writing-sample analysis produces.
///
/// The metric group is extracted after conformance, so all five metrics
/// are always populated; the scores are the model's own, with no
/// adjustment applied anywhere.
#[derive(Debug, Clone, PartialEq, derive_getters::Getters)]
pub struct WritingAnalysisOutcome {
    /// Rendered Markdown document
    rendered: String,
    /// Conformed structured result
    data: Value,
    /// The five-metric group
    metrics: WritingMetrics,
}

/// Analyzes a writing-test prompt/response pair.
#[derive(Debug, Clone)]
pub struct WritingAnalyzer<D> {
    driver: D,
    settings: GenerationSettings,
}

impl<D: GhostwriterDriver> WritingAnalyzer<D> {
    /// Creates an analyzer over the given driver.
    pub fn new(driver: D, settings: GenerationSettings) -> Self {
        Self { driver, settings }
    }

    /// Analyze one writing sample.
    ///
    /// # Errors
    ///
    /// `InvalidInput` before any model call when either text is empty;
    /// `GenerationFailed` / `AnalysisParseFailed` from the model step.
    #[instrument(skip(self, prompt, response), fields(provider = %self.driver.name()))]
    pub async fn analyze(
        &self,
        prompt: &str,
        response: &str,
    ) -> GhostwriterResult<WritingAnalysisOutcome> {
        if prompt.trim().is_empty() {
            return Err(invalid("writing prompt must not be empty"));
        }
        if response.trim().is_empty() {
            return Err(invalid("writing response must not be empty"));
        }

        let template = writing_template();
        let messages = writing_messages(prompt, response, &template);

        let data = generate_structured(&self.driver, &self.settings, messages, &template).await?;
        let metrics = extract_metrics(&data)?;
        let rendered = render_writing(&data);

        Ok(WritingAnalysisOutcome {
            rendered,
            data,
            metrics,
        })
    }
}

/// Deserialize the conformed metric section into the five-metric group.
///
/// Conformance guarantees the section's shape, so a failure here means the
/// template and the core type have drifted apart.
fn extract_metrics(data: &Value) -> Result<WritingMetrics, AnalysisError> {
    serde_json::from_value(data["writingMetrics"].clone()).map_err(|e| {
        AnalysisError::new(AnalysisErrorKind::ParseJson(format!(
            "metric section did not deserialize: {}",
            e
        )))
    })
}

fn invalid(msg: &str) -> ghostwriter_error::GhostwriterError {
    AnalysisError::new(AnalysisErrorKind::InvalidInput(msg.to_string())).into()
}
