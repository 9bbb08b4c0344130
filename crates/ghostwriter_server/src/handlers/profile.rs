//! Profile handlers.

use crate::auth::AuthenticatedUser;
use crate::blocking::run_blocking;
use crate::dto::{ProfilePatchRequest, ProfileResponse};
use crate::error::ApiResult;
use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use ghostwriter_database::ProfilePatch;
use tracing::instrument;

/// `GET /profile` - the caller's profile, created on first access.
#[instrument(skip(state), fields(user = %user.id))]
pub async fn get_profile(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> ApiResult<Json<ProfileResponse>> {
    let profiles = state.profiles.clone();
    let (profile, history) = run_blocking(move || {
        let profile = profiles.get_or_create(user.id)?;
        let history = profiles.writing_history(user.id)?;
        Ok((profile, history))
    })
    .await?;
    Ok(Json(ProfileResponse::assemble(&profile, &history)))
}

/// `POST /profile` - merge-preserving patch.
#[instrument(skip(state, req), fields(user = %user.id))]
pub async fn patch_profile(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(req): Json<ProfilePatchRequest>,
) -> ApiResult<Json<ProfileResponse>> {
    let profiles = state.profiles.clone();
    let patch: ProfilePatch = req.into();
    let (profile, history) = run_blocking(move || {
        let profile = profiles.apply_patch(user.id, &patch)?;
        let history = profiles.writing_history(user.id)?;
        Ok((profile, history))
    })
    .await?;
    Ok(Json(ProfileResponse::assemble(&profile, &history)))
}
