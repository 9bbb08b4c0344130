//! Tests for JSON extraction from model replies.

use ghostwriter_error::AnalysisErrorKind;
use ghostwriter_pipeline::{extract_json, parse_json_object};

#[test]
fn bare_object_is_extracted() {
    let payload = extract_json(r#"{"a": 1}"#).expect("extract");
    assert_eq!(payload, r#"{"a": 1}"#);
}

#[test]
fn fenced_block_is_preferred() {
    let reply = "Here is the analysis:\n```json\n{\"a\": 1}\n```\nHope that helps!";
    let payload = extract_json(reply).expect("extract");
    assert_eq!(payload, r#"{"a": 1}"#);
}

#[test]
fn unfenced_object_with_prose_uses_outermost_braces() {
    let reply = "Sure! {\"outer\": {\"inner\": 2}} Done.";
    let payload = extract_json(reply).expect("extract");
    assert_eq!(payload, r#"{"outer": {"inner": 2}}"#);
}

#[test]
fn reply_without_object_fails_extraction() {
    let err = extract_json("I cannot produce JSON today.").unwrap_err();
    assert!(matches!(err.kind, AnalysisErrorKind::ExtractJson(_)));
    assert!(err.is_parse_failure());
}

#[test]
fn invalid_json_fails_parsing() {
    let err = parse_json_object("{not json}").unwrap_err();
    assert!(matches!(err.kind, AnalysisErrorKind::ParseJson(_)));
}

#[test]
fn non_object_payload_is_rejected() {
    let err = parse_json_object("[1, 2, 3]").unwrap_err();
    assert!(matches!(err.kind, AnalysisErrorKind::NotAnObject(_)));
}
