//! Tests for request/response body shapes.

use ghostwriter_core::{ContentKind, QuizQuestion};
use ghostwriter_server::{CreateContentRequest, ListQuery, PersonalityRequest, ProfilePatchRequest};

#[test]
fn create_request_accepts_the_public_shape() {
    let body = r#"{
        "type": "blog",
        "title": "Test",
        "prompt": "Write about tides",
        "parameters": { "tone": "casual", "length": "short" },
        "imageQuery": "ocean"
    }"#;

    let req: CreateContentRequest = serde_json::from_str(body).expect("deserialize");
    assert_eq!(req.kind, ContentKind::Blog);
    assert_eq!(req.title, "Test");
    assert_eq!(req.prompt.as_deref(), Some("Write about tides"));
    assert!(req.content.is_none());
    assert_eq!(req.image_query.as_deref(), Some("ocean"));
    assert_eq!(
        req.parameters.get("tone").and_then(|v| v.as_str()),
        Some("casual")
    );
}

#[test]
fn manual_save_needs_no_prompt() {
    let body = r#"{ "type": "story", "title": "Test", "content": "Hello world" }"#;
    let req: CreateContentRequest = serde_json::from_str(body).expect("deserialize");
    assert!(req.prompt.is_none());
    assert_eq!(req.content.as_deref(), Some("Hello world"));
    assert!(req.parameters.is_empty());
}

#[test]
fn unknown_kind_is_rejected() {
    let body = r#"{ "type": "poem", "title": "T", "content": "x" }"#;
    assert!(serde_json::from_str::<CreateContentRequest>(body).is_err());
}

#[test]
fn list_query_uses_type_for_kind() {
    let query: ListQuery =
        serde_json::from_value(serde_json::json!({ "type": "speech", "limit": 5, "offset": 10 }))
            .expect("deserialize");
    assert_eq!(query.kind, Some(ContentKind::Speech));
    assert_eq!(query.limit, Some(5));
    assert_eq!(query.offset, Some(10));
}

#[test]
fn personality_request_binds_answers_by_id() {
    let body = r#"{
        "answers": [
            { "question": "writing_goal", "answer": "Connection" },
            { "question": "writing_start", "answer": "Outlines" },
            { "question": "writing_environment", "answer": "Mornings" },
            { "question": "block_handling", "answer": "Walks" }
        ]
    }"#;

    let req: PersonalityRequest = serde_json::from_str(body).expect("deserialize");
    assert_eq!(req.answers.len(), 4);
    // Submission order is free; binding is by question id.
    assert_eq!(*req.answers[0].question(), QuizQuestion::WritingGoal);
}

#[test]
fn profile_patch_is_camel_case() {
    let body = r#"{ "favoriteTopics": ["x"], "writingStyle": "narrative" }"#;
    let patch: ProfilePatchRequest = serde_json::from_str(body).expect("deserialize");
    assert_eq!(patch.favorite_topics, Some(vec!["x".to_string()]));
    assert_eq!(patch.writing_style.as_deref(), Some("narrative"));
    assert!(patch.preferred_tones.is_none());
}
