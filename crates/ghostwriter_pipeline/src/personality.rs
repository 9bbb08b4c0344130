//! Personality-quiz analysis.

use crate::prompt::personality_messages;
use crate::render::render_personality;
use crate::settings::GenerationSettings;
use crate::structured::generate_structured;
use crate::template::personality_template;
use ghostwriter_core::{QuizAnswer, QuizQuestion};
use ghostwriter_error::{AnalysisError, AnalysisErrorKind, GhostwriterResult};
use ghostwriter_interface::GhostwriterDriver;
use serde_json::Value;
use tracing::instrument;

/// The two forms of a completed personality analysis.
#[derive(Debug, Clone, PartialEq, derive_getters::Getters)]
pub struct PersonalityAnalysis {
    /// Rendered Markdown document
    rendered: String,
    /// Conformed structured result
    data: Value,
}

/// Analyzes a personality-quiz submission.
///
/// Answers are bound to questions by id: the submission may arrive in any
/// order, duplicates and gaps are rejected, and the prompt is always
/// composed in canonical question order. The analyzer never persists;
/// the caller stores the result only after success.
#[derive(Debug, Clone)]
pub struct PersonalityAnalyzer<D> {
    driver: D,
    settings: GenerationSettings,
}

impl<D: GhostwriterDriver> PersonalityAnalyzer<D> {
    /// Creates an analyzer over the given driver.
    pub fn new(driver: D, settings: GenerationSettings) -> Self {
        Self { driver, settings }
    }

    /// Analyze a complete quiz submission.
    ///
    /// # Errors
    ///
    /// `InvalidInput` before any model call when the submission is not
    /// exactly the four questions, each answered once and non-empty;
    /// `GenerationFailed` / `AnalysisParseFailed` from the model step.
    #[instrument(skip(self, answers), fields(provider = %self.driver.name()))]
    pub async fn analyze(&self, answers: &[QuizAnswer]) -> GhostwriterResult<PersonalityAnalysis> {
        let ordered = canonical_order(answers)?;
        let template = personality_template();
        let messages = personality_messages(&ordered, &template);

        let data = generate_structured(&self.driver, &self.settings, messages, &template).await?;
        let rendered = render_personality(&data);

        Ok(PersonalityAnalysis { rendered, data })
    }
}

/// Validate a submission and reorder it canonically.
///
/// Exactly one non-empty answer per question, no extras.
pub fn canonical_order(answers: &[QuizAnswer]) -> Result<Vec<QuizAnswer>, AnalysisError> {
    if answers.len() != QuizQuestion::COUNT {
        return Err(AnalysisError::new(AnalysisErrorKind::InvalidInput(format!(
            "expected {} answers, got {}",
            QuizQuestion::COUNT,
            answers.len()
        ))));
    }

    let mut ordered = Vec::with_capacity(QuizQuestion::COUNT);
    for question in QuizQuestion::all() {
        let mut matches = answers.iter().filter(|a| *a.question() == question);
        let answer = matches.next().ok_or_else(|| {
            AnalysisError::new(AnalysisErrorKind::InvalidInput(format!(
                "missing answer for question '{}'",
                question
            )))
        })?;
        if matches.next().is_some() {
            return Err(AnalysisError::new(AnalysisErrorKind::InvalidInput(format!(
                "duplicate answer for question '{}'",
                question
            ))));
        }
        if answer.answer().trim().is_empty() {
            return Err(AnalysisError::new(AnalysisErrorKind::InvalidInput(format!(
                "empty answer for question '{}'",
                question
            ))));
        }
        ordered.push(answer.clone());
    }

    Ok(ordered)
}
