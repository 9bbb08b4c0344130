//! Bridge between the async handlers and the synchronous stores.

use crate::error::{ApiError, ApiResult};
use ghostwriter_error::{DatabaseError, DatabaseErrorKind, GhostwriterResult};

/// Run a store operation on the blocking thread pool.
///
/// A pool checkout can wait up to the r2d2 timeout and every query does
/// synchronous Postgres I/O, so store calls never run on a runtime worker
/// thread.
pub async fn run_blocking<T, F>(op: F) -> ApiResult<T>
where
    F: FnOnce() -> GhostwriterResult<T> + Send + 'static,
    T: Send + 'static,
{
    let result = tokio::task::spawn_blocking(op).await.map_err(|e| {
        DatabaseError::new(DatabaseErrorKind::Query(format!(
            "Store task failed to complete: {}",
            e
        )))
    })?;

    result.map_err(ApiError::from)
}
