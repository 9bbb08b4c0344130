//! Tests for error construction, display, and unification.

use ghostwriter_error::{
    AuthError, AuthErrorKind, ContentError, ContentErrorKind, GenerationError,
    GenerationErrorKind, GhostwriterError, GhostwriterErrorKind,
};

#[test]
fn errors_capture_the_construction_site() {
    let err = ContentError::new(ContentErrorKind::NotFoundOrUnauthorized);
    assert!(err.file.ends_with("error_test.rs"));
    assert!(err.line > 0);
}

#[test]
fn display_names_the_domain_and_location() {
    let err = GenerationError::new(GenerationErrorKind::EmptyCompletion);
    let rendered = err.to_string();
    assert!(rendered.starts_with("Generation Error:"));
    assert!(rendered.contains("at line"));
    assert!(rendered.contains("error_test.rs"));
}

#[test]
fn duplicate_display_names_the_title() {
    let err = ContentError::new(ContentErrorKind::Duplicate {
        title: "Morning Pages".to_string(),
    });
    assert!(err.to_string().contains("'Morning Pages'"));
}

#[test]
fn domain_errors_convert_into_the_unified_error() {
    let err: GhostwriterError = AuthError::new(AuthErrorKind::ExpiredToken).into();
    assert!(matches!(err.kind(), GhostwriterErrorKind::Auth(_)));

    let err: GhostwriterError =
        ContentError::new(ContentErrorKind::NotFoundOrUnauthorized).into();
    assert!(matches!(
        err.kind(),
        GhostwriterErrorKind::Content(ContentError {
            kind: ContentErrorKind::NotFoundOrUnauthorized,
            ..
        })
    ));
}

#[test]
fn unified_display_prefixes_the_service_name() {
    let err: GhostwriterError = GenerationError::new(GenerationErrorKind::Api {
        status: 429,
        message: "rate limited".to_string(),
    })
    .into();
    let rendered = err.to_string();
    assert!(rendered.starts_with("Ghostwriter Error:"));
    assert!(rendered.contains("status 429"));
}
