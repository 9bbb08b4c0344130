//! Tests for the personality-quiz analyzer.

mod common;

use common::FakeDriver;
use ghostwriter_core::{QuizAnswer, QuizQuestion};
use ghostwriter_error::{AnalysisErrorKind, GhostwriterErrorKind};
use ghostwriter_pipeline::{GenerationSettings, PersonalityAnalyzer, canonical_order};

fn full_submission() -> Vec<QuizAnswer> {
    vec![
        QuizAnswer::new(QuizQuestion::WritingStart, "I outline first."),
        QuizAnswer::new(QuizQuestion::WritingEnvironment, "Early mornings, quiet."),
        QuizAnswer::new(QuizQuestion::BlockHandling, "I go for a walk."),
        QuizAnswer::new(QuizQuestion::WritingGoal, "I want readers to feel seen."),
    ]
}

const MODEL_REPLY: &str = r#"{
    "overallProfile": {
        "primaryStyle": "Reflective",
        "secondaryStyle": "Narrative",
        "description": "A deliberate planner.",
        "strengths": ["structure", "empathy"]
    },
    "recommendations": ["Keep a morning journal"]
}"#;

#[tokio::test]
async fn analysis_renders_markdown_and_returns_data() {
    let driver = FakeDriver::with_replies([MODEL_REPLY]);
    let analyzer = PersonalityAnalyzer::new(driver, GenerationSettings::default());

    let analysis = analyzer.analyze(&full_submission()).await.expect("analysis");

    assert!(analysis.rendered().contains("# Writing Personality Analysis"));
    assert!(analysis.rendered().contains("Reflective"));
    assert_eq!(
        analysis.data()["overallProfile"]["primaryStyle"],
        "Reflective"
    );
    // Sections the model omitted still exist, conformed to defaults.
    assert_eq!(analysis.data()["writingApproach"]["process"], "");
}

#[tokio::test]
async fn shuffled_answers_produce_the_same_prompt() {
    let canonical_driver = FakeDriver::with_replies([MODEL_REPLY]);
    let shuffled_driver = FakeDriver::with_replies([MODEL_REPLY]);

    let mut shuffled = full_submission();
    shuffled.reverse();

    PersonalityAnalyzer::new(&canonical_driver, GenerationSettings::default())
        .analyze(&full_submission())
        .await
        .expect("canonical");
    PersonalityAnalyzer::new(&shuffled_driver, GenerationSettings::default())
        .analyze(&shuffled)
        .await
        .expect("shuffled");

    assert_eq!(
        canonical_driver.requests()[0].messages(),
        shuffled_driver.requests()[0].messages()
    );
}

#[tokio::test]
async fn incomplete_submission_fails_before_any_call() {
    let driver = FakeDriver::with_replies([MODEL_REPLY]);
    let analyzer = PersonalityAnalyzer::new(&driver, GenerationSettings::default());

    let mut missing = full_submission();
    missing.pop();
    let err = analyzer.analyze(&missing).await.unwrap_err();
    assert!(matches!(
        err.kind(),
        GhostwriterErrorKind::Analysis(e)
            if matches!(e.kind, AnalysisErrorKind::InvalidInput(_))
    ));
    assert!(driver.requests().is_empty());
}

#[tokio::test]
async fn non_json_reply_is_a_parse_failure() {
    let driver = FakeDriver::with_replies(["I would rather write prose."]);
    let analyzer = PersonalityAnalyzer::new(driver, GenerationSettings::default());

    let err = analyzer.analyze(&full_submission()).await.unwrap_err();
    assert!(matches!(
        err.kind(),
        GhostwriterErrorKind::Analysis(e) if e.is_parse_failure()
    ));
}

#[test]
fn duplicate_question_is_rejected() {
    let mut submission = full_submission();
    submission[1] = QuizAnswer::new(QuizQuestion::WritingStart, "Twice.");

    let err = canonical_order(&submission).unwrap_err();
    assert!(matches!(err.kind, AnalysisErrorKind::InvalidInput(_)));
}

#[test]
fn empty_answer_is_rejected() {
    let mut submission = full_submission();
    submission[2] = QuizAnswer::new(QuizQuestion::BlockHandling, "   ");

    let err = canonical_order(&submission).unwrap_err();
    assert!(matches!(err.kind, AnalysisErrorKind::InvalidInput(_)));
}
