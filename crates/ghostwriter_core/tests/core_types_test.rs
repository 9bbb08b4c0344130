//! Tests for the shared vocabulary types.

use ghostwriter_core::{
    ContentKind, Message, MetricScore, QuizAnswer, QuizQuestion, Role, WritingMetric,
    WritingMetrics, slugify,
};
use std::str::FromStr;

#[test]
fn slugify_collapses_and_lowercases() {
    assert_eq!(slugify("My First Post"), "my-first-post");
    assert_eq!(slugify("Hello, World!"), "hello-world");
    assert_eq!(slugify("  Drafts & Revisions  "), "drafts-revisions");
    assert_eq!(slugify("Caffè Américain"), "caffe-americain");
}

#[test]
fn content_kind_round_trips_through_strings() {
    for kind in [ContentKind::Blog, ContentKind::Story, ContentKind::Speech] {
        let s = kind.to_string();
        assert_eq!(ContentKind::from_str(&s).ok(), Some(kind));
    }
    assert_eq!(ContentKind::Blog.to_string(), "blog");
    assert!(ContentKind::from_str("poem").is_err());
}

#[test]
fn content_kind_phrases_read_naturally() {
    assert_eq!(ContentKind::Blog.phrase(), "blog post");
    assert_eq!(ContentKind::Story.phrase(), "short story");
    assert_eq!(ContentKind::Speech.phrase(), "speech");
}

#[test]
fn quiz_questions_enumerate_in_canonical_order() {
    let questions: Vec<QuizQuestion> = QuizQuestion::all().collect();
    assert_eq!(questions.len(), QuizQuestion::COUNT);
    assert_eq!(questions[0], QuizQuestion::WritingStart);
    assert_eq!(questions[3], QuizQuestion::WritingGoal);
}

#[test]
fn quiz_answer_serializes_with_snake_case_question_id() {
    let answer = QuizAnswer::new(QuizQuestion::BlockHandling, "I go for a walk.");
    let json = serde_json::to_value(&answer).unwrap();
    assert_eq!(json["question"], "block_handling");
    assert_eq!(json["answer"], "I go for a walk.");

    let back: QuizAnswer = serde_json::from_value(json).unwrap();
    assert_eq!(back, answer);
}

#[test]
fn message_constructors_set_roles() {
    assert_eq!(*Message::system("sys").role(), Role::System);
    assert_eq!(*Message::user("usr").role(), Role::User);
    assert_eq!(*Message::assistant("asst").role(), Role::Assistant);
    assert_eq!(Message::user("hello").content(), "hello");
}

#[test]
fn writing_metrics_scores_follow_presentation_order() {
    let metrics = WritingMetrics::builder()
        .optimistic_tone(MetricScore::new(10, vec![], vec![]))
        .reflective_quality(MetricScore::new(20, vec![], vec![]))
        .motivational_impact(MetricScore::new(30, vec![], vec![]))
        .poetic_elements(MetricScore::new(40, vec![], vec![]))
        .conversational_style(MetricScore::new(50, vec![], vec![]))
        .build()
        .unwrap();

    let scores = metrics.scores();
    assert_eq!(scores[0], (WritingMetric::OptimisticTone, 10));
    assert_eq!(scores[4], (WritingMetric::ConversationalStyle, 50));
}

#[test]
fn writing_metrics_serialize_camel_case() {
    let json = serde_json::to_value(WritingMetrics::default()).unwrap();
    for metric in WritingMetric::all() {
        let key = metric.to_string();
        assert!(json.get(&key).is_some(), "missing key {key}");
        assert_eq!(json[&key]["score"], 0);
    }
}
