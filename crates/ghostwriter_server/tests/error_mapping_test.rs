//! Tests for the error to HTTP status mapping.

use axum::http::StatusCode;
use ghostwriter_error::{
    AnalysisError, AnalysisErrorKind, AuthError, AuthErrorKind, ContentError, ContentErrorKind,
    DatabaseError, DatabaseErrorKind, GenerationError, GenerationErrorKind, GhostwriterError,
};
use ghostwriter_server::ApiError;

fn parts_of(err: impl Into<GhostwriterError>) -> (StatusCode, &'static str, String) {
    ApiError::from(err.into()).parts()
}

#[test]
fn auth_errors_are_unauthorized() {
    for kind in [
        AuthErrorKind::MissingToken,
        AuthErrorKind::InvalidToken,
        AuthErrorKind::ExpiredToken,
    ] {
        let (status, _, _) = parts_of(AuthError::new(kind));
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}

#[test]
fn invalid_input_is_bad_request() {
    let (status, code, _) = parts_of(ContentError::new(ContentErrorKind::InvalidInput(
        "title must not be empty".to_string(),
    )));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(code, "invalid_input");

    let (status, code, _) = parts_of(AnalysisError::new(AnalysisErrorKind::InvalidInput(
        "expected 4 answers".to_string(),
    )));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(code, "invalid_input");
}

#[test]
fn not_found_and_unauthorized_are_indistinguishable() {
    let (status, code, message) =
        parts_of(ContentError::new(ContentErrorKind::NotFoundOrUnauthorized));
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(code, "not_found");
    // No wording that could hint at existence vs ownership.
    assert_eq!(message, "Content not found");
}

#[test]
fn duplicate_content_is_conflict() {
    let (status, code, message) = parts_of(ContentError::new(ContentErrorKind::Duplicate {
        title: "Test".to_string(),
    }));
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(code, "duplicate_content");
    assert!(message.contains("Test"));
}

#[test]
fn generation_and_parse_failures_are_distinct_codes() {
    let (status, code, _) = parts_of(GenerationError::new(GenerationErrorKind::EmptyCompletion));
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(code, "generation_failed");

    let (status, code, _) = parts_of(AnalysisError::new(AnalysisErrorKind::ParseJson(
        "unexpected token".to_string(),
    )));
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(code, "analysis_parse_failed");
}

#[test]
fn store_failures_do_not_leak_internals() {
    let (status, code, message) = parts_of(DatabaseError::new(DatabaseErrorKind::Query(
        "relation content_items does not exist".to_string(),
    )));
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(code, "persistence_failed");
    assert!(!message.contains("content_items"));
}
