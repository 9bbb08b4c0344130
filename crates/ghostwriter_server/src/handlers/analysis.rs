//! Analysis handlers.
//!
//! Persistence happens only after generation and parsing succeed, so a
//! failed analysis leaves previously stored profile state untouched.

use crate::auth::AuthenticatedUser;
use crate::blocking::run_blocking;
use crate::dto::{PersonalityRequest, PersonalityResponse, WritingRequest, WritingResponse};
use crate::error::ApiResult;
use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use ghostwriter_database::WritingAnalysisRecord;
use ghostwriter_error::{DatabaseError, DatabaseErrorKind};
use ghostwriter_pipeline::{PersonalityAnalyzer, WritingAnalyzer};
use tracing::instrument;

/// `POST /analyze-personality` - analyze the four quiz answers and
/// overwrite the profile's personality fields.
#[instrument(skip(state, req), fields(user = %user.id))]
pub async fn analyze_personality(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(req): Json<PersonalityRequest>,
) -> ApiResult<Json<PersonalityResponse>> {
    let analyzer = PersonalityAnalyzer::new(state.driver.clone(), state.generation.clone());
    let analysis = analyzer.analyze(&req.answers).await?;

    let profiles = state.profiles.clone();
    let rendered = analysis.rendered().clone();
    let data = analysis.data().clone();
    run_blocking(move || profiles.record_personality_analysis(user.id, &rendered, &data)).await?;

    Ok(Json(PersonalityResponse {
        analysis: analysis.rendered().clone(),
        analysis_data: analysis.data().clone(),
    }))
}

/// `POST /analyze-writing` - score the sample on the five metrics,
/// overwrite the profile's current analysis, and append one history
/// entry.
#[instrument(skip(state, req), fields(user = %user.id))]
pub async fn analyze_writing(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(req): Json<WritingRequest>,
) -> ApiResult<Json<WritingResponse>> {
    let analyzer = WritingAnalyzer::new(state.driver.clone(), state.generation.clone());
    let outcome = analyzer.analyze(&req.prompt, &req.response).await?;

    let record = WritingAnalysisRecord::builder()
        .prompt(req.prompt)
        .response(req.response)
        .rendered(outcome.rendered().clone())
        .data(outcome.data().clone())
        .metrics(outcome.metrics().clone())
        .build()
        .map_err(|e| DatabaseError::new(DatabaseErrorKind::Serialization(e.to_string())))?;

    let profiles = state.profiles.clone();
    run_blocking(move || profiles.record_writing_analysis(user.id, &record)).await?;

    Ok(Json(WritingResponse {
        analysis: outcome.rendered().clone(),
        analysis_data: outcome.data().clone(),
        metrics: outcome.metrics().clone(),
    }))
}
