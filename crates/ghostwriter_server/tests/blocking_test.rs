//! Tests for the blocking-store bridge.

use ghostwriter_error::{ContentError, ContentErrorKind};
use ghostwriter_server::run_blocking;

#[tokio::test]
async fn returns_the_operation_result() {
    let value = run_blocking(|| Ok(21 * 2)).await.expect("operation succeeds");
    assert_eq!(value, 42);
}

#[tokio::test]
async fn propagates_store_errors_with_their_status() {
    let err = run_blocking::<(), _>(|| {
        Err(ContentError::new(ContentErrorKind::NotFoundOrUnauthorized).into())
    })
    .await
    .expect_err("operation fails");

    let (status, code, _) = err.parts();
    assert_eq!(status.as_u16(), 404);
    assert_eq!(code, "not_found");
}

#[tokio::test]
async fn a_panicking_operation_surfaces_as_persistence_failure() {
    let err = run_blocking::<(), _>(|| panic!("pool poisoned"))
        .await
        .expect_err("operation fails");

    let (status, code, _) = err.parts();
    assert_eq!(status.as_u16(), 500);
    assert_eq!(code, "persistence_failed");
}
