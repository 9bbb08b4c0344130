//! Route table.

use crate::handlers::{analysis, content, profile, public};
use crate::state::AppState;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tracing::instrument;

/// Build the service router over the given state.
pub fn create_router(state: AppState) -> Router {
    let router = Router::new()
        .route("/health", get(health_check))
        .route(
            "/content",
            post(content::create_content).get(content::list_content),
        )
        .route(
            "/content/:id",
            get(content::get_content)
                .put(content::update_content)
                .delete(content::delete_content),
        )
        .route("/content/:id/publish", post(content::publish_content))
        .route("/analyze-personality", post(analysis::analyze_personality))
        .route("/analyze-writing", post(analysis::analyze_writing))
        .route(
            "/profile",
            get(profile::get_profile).post(profile::patch_profile),
        )
        .route("/published", get(public::list_published))
        .route("/published/:id", get(public::get_published));

    #[cfg(feature = "metrics")]
    let router = router.layer(axum::middleware::from_fn(crate::metrics::track_requests));

    router.with_state(state)
}

/// Health check endpoint.
#[instrument(skip_all)]
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
