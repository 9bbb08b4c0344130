//! Writing-style metrics.
//!
//! Every writing-sample analysis scores the same five dimensions. The
//! group is modeled as a struct with one field per metric so a partial set
//! is unrepresentable: once analysis has run, all five exist together.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// The five fixed stylistic dimensions of a writing analysis.
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
#[strum(serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum WritingMetric {
    OptimisticTone,
    ReflectiveQuality,
    MotivationalImpact,
    PoeticElements,
    ConversationalStyle,
}

impl WritingMetric {
    /// All metrics in presentation order.
    pub fn all() -> impl Iterator<Item = WritingMetric> {
        WritingMetric::iter()
    }

    /// Heading label for rendered output.
    pub fn label(&self) -> &'static str {
        match self {
            WritingMetric::OptimisticTone => "Optimistic Tone",
            WritingMetric::ReflectiveQuality => "Reflective Quality",
            WritingMetric::MotivationalImpact => "Motivational Impact",
            WritingMetric::PoeticElements => "Poetic Elements",
            WritingMetric::ConversationalStyle => "Conversational Style",
        }
    }
}

/// Score and commentary for one metric.
///
/// # Examples
///
/// ```
/// use ghostwriter_core::MetricScore;
///
/// let score = MetricScore::new(78, vec!["bright opening".into()], vec![]);
/// assert_eq!(*score.score(), 78);
/// ```
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
pub struct MetricScore {
    /// 0-100 score for this dimension
    #[builder(default)]
    score: u8,
    /// Excerpts from the sample illustrating the score
    #[builder(default)]
    examples: Vec<String>,
    /// Concrete improvement suggestions
    #[builder(default)]
    suggestions: Vec<String>,
}

impl MetricScore {
    /// Creates a new metric score.
    pub fn new(score: u8, examples: Vec<String>, suggestions: Vec<String>) -> Self {
        Self {
            score,
            examples,
            suggestions,
        }
    }

    /// Returns a builder for constructing a MetricScore.
    pub fn builder() -> MetricScoreBuilder {
        MetricScoreBuilder::default()
    }
}

/// The complete five-metric group for one analysis.
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[serde(rename_all = "camelCase")]
pub struct WritingMetrics {
    #[builder(default)]
    optimistic_tone: MetricScore,
    #[builder(default)]
    reflective_quality: MetricScore,
    #[builder(default)]
    motivational_impact: MetricScore,
    #[builder(default)]
    poetic_elements: MetricScore,
    #[builder(default)]
    conversational_style: MetricScore,
}

impl WritingMetrics {
    /// Returns a builder for constructing WritingMetrics.
    pub fn builder() -> WritingMetricsBuilder {
        WritingMetricsBuilder::default()
    }

    /// Access one metric by name.
    pub fn metric(&self, metric: WritingMetric) -> &MetricScore {
        match metric {
            WritingMetric::OptimisticTone => &self.optimistic_tone,
            WritingMetric::ReflectiveQuality => &self.reflective_quality,
            WritingMetric::MotivationalImpact => &self.motivational_impact,
            WritingMetric::PoeticElements => &self.poetic_elements,
            WritingMetric::ConversationalStyle => &self.conversational_style,
        }
    }

    /// Bare scores in presentation order, for history flattening.
    pub fn scores(&self) -> [(WritingMetric, u8); 5] {
        let mut out = [(WritingMetric::OptimisticTone, 0); 5];
        for (slot, metric) in out.iter_mut().zip(WritingMetric::all()) {
            *slot = (metric, *self.metric(metric).score());
        }
        out
    }
}
