//! Tests for the writing-sample analyzer.

mod common;

use common::FakeDriver;
use ghostwriter_core::WritingMetric;
use ghostwriter_error::GhostwriterErrorKind;
use ghostwriter_pipeline::{GenerationSettings, WritingAnalyzer};

const MODEL_REPLY: &str = r#"{
    "writingMetrics": {
        "optimisticTone": {
            "score": 82,
            "examples": ["the sun kept its promise"],
            "suggestions": ["vary the brightness"]
        },
        "reflectiveQuality": { "score": 74, "examples": [], "suggestions": [] },
        "motivationalImpact": { "score": 150, "examples": [], "suggestions": [] }
    },
    "styleAnalysis": {
        "strengths": ["rhythm"],
        "characteristics": ["short sentences"],
        "description": "Brisk and warm."
    },
    "recommendations": ["Read your drafts aloud"]
}"#;

#[tokio::test]
async fn all_five_metrics_are_always_populated() {
    let driver = FakeDriver::with_replies([MODEL_REPLY]);
    let analyzer = WritingAnalyzer::new(driver, GenerationSettings::default());

    let outcome = analyzer
        .analyze("Describe a sunrise", "The sun kept its promise.")
        .await
        .expect("analysis");

    let metrics = outcome.metrics();
    assert_eq!(*metrics.metric(WritingMetric::OptimisticTone).score(), 82);
    assert_eq!(*metrics.metric(WritingMetric::ReflectiveQuality).score(), 74);
    // Out-of-range score clamped, missing metrics defaulted: the group is
    // never partial.
    assert_eq!(*metrics.metric(WritingMetric::MotivationalImpact).score(), 100);
    assert_eq!(*metrics.metric(WritingMetric::PoeticElements).score(), 0);
    assert_eq!(*metrics.metric(WritingMetric::ConversationalStyle).score(), 0);
}

#[tokio::test]
async fn rendered_document_carries_all_sections() {
    let driver = FakeDriver::with_replies([MODEL_REPLY]);
    let analyzer = WritingAnalyzer::new(driver, GenerationSettings::default());

    let outcome = analyzer
        .analyze("Describe a sunrise", "The sun kept its promise.")
        .await
        .expect("analysis");

    let rendered = outcome.rendered();
    assert!(rendered.contains("# Writing Style Analysis"));
    assert!(rendered.contains("## Writing Metrics"));
    assert!(rendered.contains("### Optimistic Tone - 82/100"));
    assert!(rendered.contains("## Style Analysis"));
    assert!(rendered.contains("## Content Analysis"));
    assert!(rendered.contains("## Recommendations"));
    assert!(rendered.contains("the sun kept its promise"));
}

#[tokio::test]
async fn empty_inputs_fail_before_any_call() {
    let driver = FakeDriver::with_replies([MODEL_REPLY]);
    let analyzer = WritingAnalyzer::new(&driver, GenerationSettings::default());

    for (prompt, response) in [("", "text"), ("prompt", "  ")] {
        let err = analyzer.analyze(prompt, response).await.unwrap_err();
        assert!(matches!(err.kind(), GhostwriterErrorKind::Analysis(_)));
    }
    assert!(driver.requests().is_empty());
}

#[tokio::test]
async fn scores_are_the_models_own() {
    // Two runs with the same reply yield identical scores: nothing in the
    // pipeline adjusts them.
    let first = FakeDriver::with_replies([MODEL_REPLY]);
    let second = FakeDriver::with_replies([MODEL_REPLY]);

    let a = WritingAnalyzer::new(first, GenerationSettings::default())
        .analyze("p", "r")
        .await
        .expect("first");
    let b = WritingAnalyzer::new(second, GenerationSettings::default())
        .analyze("p", "r")
        .await
        .expect("second");

    assert_eq!(a.metrics(), b.metrics());
}
