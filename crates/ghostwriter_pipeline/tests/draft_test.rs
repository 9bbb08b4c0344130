//! Tests for free-text draft generation.

mod common;

use common::FakeDriver;
use ghostwriter_core::{ContentKind, ResponseFormat, Role};
use ghostwriter_error::{GenerationErrorKind, GhostwriterErrorKind};
use ghostwriter_pipeline::{DraftGenerator, DraftRequest, GenerationSettings};
use serde_json::json;
use std::collections::BTreeMap;

fn request(title: &str, prompt: &str) -> DraftRequest {
    let mut parameters = BTreeMap::new();
    parameters.insert("tone".to_string(), json!("casual"));
    parameters.insert("length".to_string(), json!("short"));
    DraftRequest::builder()
        .kind(ContentKind::Blog)
        .title(title)
        .prompt(prompt)
        .parameters(parameters)
        .build()
        .expect("valid request")
}

#[tokio::test]
async fn returns_completion_text_unchanged() {
    let driver = FakeDriver::with_replies(["A fine post about tides."]);
    let generator = DraftGenerator::new(driver, GenerationSettings::default());

    let text = generator
        .generate_draft(&request("Tides", "Write about tides"))
        .await
        .expect("draft");
    assert_eq!(text, "A fine post about tides.");
}

#[tokio::test]
async fn prompt_embeds_title_and_parameters() {
    let driver = FakeDriver::with_replies(["ok"]);
    let generator = DraftGenerator::new(&driver, GenerationSettings::default());

    generator
        .generate_draft(&request("Tides", "Write about tides"))
        .await
        .expect("draft");

    let requests = driver.requests();
    assert_eq!(requests.len(), 1);
    let sent = &requests[0];
    assert_eq!(*sent.response_format(), ResponseFormat::Text);
    assert_eq!(*sent.messages()[0].role(), Role::System);
    assert!(sent.messages()[0].content().contains("blog post"));
    let user = sent.messages()[1].content();
    assert!(user.contains("Title: Tides"));
    assert!(user.contains("tone: casual"));
    assert!(user.contains("length: short"));
}

#[tokio::test]
async fn empty_title_is_rejected_before_any_call() {
    let driver = FakeDriver::with_replies(["never used"]);
    let generator = DraftGenerator::new(&driver, GenerationSettings::default());

    let err = generator
        .generate_draft(&request("  ", "Write about tides"))
        .await
        .unwrap_err();
    assert!(matches!(err.kind(), GhostwriterErrorKind::Content(_)));
    assert!(driver.requests().is_empty());
}

#[tokio::test]
async fn empty_completion_is_a_generation_failure() {
    let driver = FakeDriver::with_replies(["   \n"]);
    let generator = DraftGenerator::new(driver, GenerationSettings::default());

    let err = generator
        .generate_draft(&request("Tides", "Write about tides"))
        .await
        .unwrap_err();
    assert!(matches!(
        err.kind(),
        GhostwriterErrorKind::Generation(e)
            if matches!(e.kind, GenerationErrorKind::EmptyCompletion)
    ));
}

#[tokio::test]
async fn driver_failure_propagates_as_generation_error() {
    let driver = FakeDriver::failing(GenerationErrorKind::Http("connection refused".into()));
    let generator = DraftGenerator::new(driver, GenerationSettings::default());

    let err = generator
        .generate_draft(&request("Tides", "Write about tides"))
        .await
        .unwrap_err();
    assert!(matches!(err.kind(), GhostwriterErrorKind::Generation(_)));
}
