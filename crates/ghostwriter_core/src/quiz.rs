//! Personality quiz vocabulary.
//!
//! Answers are bound to questions by id rather than by position, so a
//! caller can submit them in any order without mislabeling the analysis.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// The four fixed personality-quiz questions.
///
/// The enum order is the canonical prompt order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum QuizQuestion {
    /// How the writer starts a writing session
    WritingStart,
    /// Where and when the writer works best
    WritingEnvironment,
    /// How the writer deals with writer's block
    BlockHandling,
    /// What the writer hopes their writing achieves
    WritingGoal,
}

impl QuizQuestion {
    /// Number of quiz questions; a complete submission has exactly this
    /// many answers.
    pub const COUNT: usize = 4;

    /// All questions in canonical order.
    pub fn all() -> impl Iterator<Item = QuizQuestion> {
        QuizQuestion::iter()
    }

    /// Label used when embedding the answer into the analysis prompt.
    pub fn label(&self) -> &'static str {
        match self {
            QuizQuestion::WritingStart => "Writing Start",
            QuizQuestion::WritingEnvironment => "Writing Environment",
            QuizQuestion::BlockHandling => "Writer's Block Handling",
            QuizQuestion::WritingGoal => "Writing Goal",
        }
    }
}

/// One answered quiz question.
///
/// # Examples
///
/// ```
/// use ghostwriter_core::{QuizAnswer, QuizQuestion};
///
/// let answer = QuizAnswer::new(QuizQuestion::WritingStart, "I outline first.");
/// assert_eq!(*answer.question(), QuizQuestion::WritingStart);
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct QuizAnswer {
    /// Which question this answers
    question: QuizQuestion,
    /// The free-text answer
    answer: String,
}

impl QuizAnswer {
    /// Creates a new answer for the given question.
    pub fn new(question: QuizQuestion, answer: impl Into<String>) -> Self {
        Self {
            question,
            answer: answer.into(),
        }
    }
}
