//! Public, unauthenticated read surface.

use crate::blocking::run_blocking;
use crate::dto::{ContentItemResponse, ListQuery};
use crate::error::ApiResult;
use crate::state::AppState;
use axum::Json;
use axum::extract::{Path, Query, State};
use ghostwriter_database::Pagination;
use tracing::instrument;
use uuid::Uuid;

/// `GET /published` - published items across all authors, newest publish
/// first.
#[instrument(skip(state))]
pub async fn list_published(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<Vec<ContentItemResponse>>> {
    let store = state.content.clone();
    let items = run_blocking(move || {
        store.list_published(query.kind, Pagination::new(query.limit, query.offset))
    })
    .await?;
    Ok(Json(items.iter().map(Into::into).collect()))
}

/// `GET /published/{id}` - one published item.
#[instrument(skip(state))]
pub async fn get_published(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ContentItemResponse>> {
    let store = state.content.clone();
    let item = run_blocking(move || store.find_published(id)).await?;
    Ok(Json((&item).into()))
}
