//! Content library handlers.
//!
//! Every handler here sequences generation before persistence: a failed
//! generation never touches the store, and a store failure after a
//! successful generation surfaces as a persistence error, distinct from a
//! generation one.

use crate::auth::AuthenticatedUser;
use crate::blocking::run_blocking;
use crate::dto::{ContentItemResponse, CreateContentRequest, ListQuery, UpdateContentRequest};
use crate::error::ApiResult;
use crate::state::AppState;
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use ghostwriter_database::{ContentChanges, NewContent, Pagination};
use ghostwriter_error::{ContentError, ContentErrorKind};
use ghostwriter_pipeline::{DraftGenerator, DraftRequest};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::instrument;
use uuid::Uuid;

/// `POST /content` - generate (or accept) a body, then save.
#[instrument(skip(state, req), fields(user = %user.id, kind = %req.kind))]
pub async fn create_content(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(req): Json<CreateContentRequest>,
) -> ApiResult<(StatusCode, Json<ContentItemResponse>)> {
    let body = match (&req.prompt, &req.content) {
        (Some(prompt), _) if !prompt.trim().is_empty() => {
            let generator = DraftGenerator::new(state.driver.clone(), state.generation.clone());
            let draft = DraftRequest::builder()
                .kind(req.kind)
                .title(req.title.clone())
                .prompt(prompt.clone())
                .parameters(req.parameters.clone())
                .build()
                .map_err(|e| {
                    ContentError::new(ContentErrorKind::InvalidInput(e.to_string()))
                })?;
            generator.generate_draft(&draft).await?
        }
        (_, Some(content)) if !content.trim().is_empty() => content.clone(),
        _ => {
            return Err(ContentError::new(ContentErrorKind::InvalidInput(
                "either 'prompt' or 'content' is required".to_string(),
            ))
            .into());
        }
    };

    // Best-effort decoration; a failed lookup degrades to the fallback
    // URL and never aborts the save.
    let image_url = match &req.image_query {
        Some(query) if !query.trim().is_empty() => {
            Some(state.images.search_or_fallback(query).await)
        }
        _ => None,
    };

    let new_content = NewContent::builder()
        .kind(req.kind)
        .title(req.title)
        .body(body)
        .tone(styling(&req.parameters, "tone"))
        .style(styling(&req.parameters, "style"))
        .emotion(styling(&req.parameters, "emotion"))
        .image_url(image_url)
        .build()
        .map_err(|e| ContentError::new(ContentErrorKind::InvalidInput(e.to_string())))?;

    let store = state.content.clone();
    let item = run_blocking(move || store.create(user.id, &new_content)).await?;
    Ok((StatusCode::CREATED, Json((&item).into())))
}

/// `GET /content` - the caller's items, newest first.
#[instrument(skip(state), fields(user = %user.id))]
pub async fn list_content(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<Vec<ContentItemResponse>>> {
    let store = state.content.clone();
    let items = run_blocking(move || {
        store.list_by_author(
            user.id,
            query.kind,
            Pagination::new(query.limit, query.offset),
        )
    })
    .await?;
    Ok(Json(items.iter().map(Into::into).collect()))
}

/// `GET /content/{id}` - one item, ownership-checked.
#[instrument(skip(state), fields(user = %user.id))]
pub async fn get_content(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ContentItemResponse>> {
    let store = state.content.clone();
    let item = run_blocking(move || store.find_by_id(id, user.id)).await?;
    Ok(Json((&item).into()))
}

/// `PUT /content/{id}` - edit title/body/styling, ownership-checked.
#[instrument(skip(state, req), fields(user = %user.id))]
pub async fn update_content(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateContentRequest>,
) -> ApiResult<Json<ContentItemResponse>> {
    let changes = ContentChanges {
        title: req.title,
        body: req.content,
        tone: req.tone,
        style: req.style,
        emotion: req.emotion,
        image_url: req.image_url,
    };
    let store = state.content.clone();
    let item = run_blocking(move || store.update(id, user.id, &changes)).await?;
    Ok(Json((&item).into()))
}

/// `DELETE /content/{id}` - ownership-checked delete.
#[instrument(skip(state), fields(user = %user.id))]
pub async fn delete_content(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    let store = state.content.clone();
    run_blocking(move || store.delete(id, user.id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `POST /content/{id}/publish` - one-way draft to published transition.
#[instrument(skip(state), fields(user = %user.id))]
pub async fn publish_content(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ContentItemResponse>> {
    let store = state.content.clone();
    let item = run_blocking(move || store.publish(id, user.id)).await?;
    Ok(Json((&item).into()))
}

/// Pull a styling column out of the open parameter map.
fn styling(parameters: &BTreeMap<String, Value>, key: &str) -> Option<String> {
    parameters.get(key).and_then(Value::as_str).map(String::from)
}
