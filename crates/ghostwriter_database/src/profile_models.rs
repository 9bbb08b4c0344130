//! Diesel models for user profiles and writing history.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;
use uuid::Uuid;

/// Database row for the user_profiles table.
///
/// One per authenticated user, created implicitly on first access and
/// never deleted.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable, Serialize, derive_getters::Getters)]
#[diesel(table_name = crate::schema::user_profiles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserProfileRow {
    id: Uuid,
    user_id: Uuid,
    writing_style: Option<String>,
    target_audience: Option<String>,
    writing_goals: Option<String>,
    experience_level: Option<String>,
    preferred_length: Option<String>,
    reference_authors: Option<String>,
    preferred_tones: Vec<String>,
    favorite_topics: Vec<String>,
    personality_analysis: Option<String>,
    personality_analysis_data: Option<serde_json::Value>,
    writing_analysis: Option<String>,
    writing_analysis_data: Option<serde_json::Value>,
    writing_metrics: Option<serde_json::Value>,
    last_writing_prompt: Option<String>,
    last_writing_response: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Insertable struct for implicit profile creation.
///
/// All preference and analysis fields start at their column defaults.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::user_profiles)]
pub struct NewUserProfileRow {
    pub id: Uuid,
    pub user_id: Uuid,
}

/// Updateable struct applying a merged profile patch.
///
/// Scalar fields are `None` when the patch omitted them (left untouched);
/// the array fields carry the already-merged union when the patch named
/// them.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = crate::schema::user_profiles)]
pub struct UpdateUserProfileRow {
    pub writing_style: Option<String>,
    pub target_audience: Option<String>,
    pub writing_goals: Option<String>,
    pub experience_level: Option<String>,
    pub preferred_length: Option<String>,
    pub reference_authors: Option<String>,
    pub preferred_tones: Option<Vec<String>>,
    pub favorite_topics: Option<Vec<String>>,
    pub updated_at: DateTime<Utc>,
}

/// Updateable struct overwriting the personality-analysis fields.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = crate::schema::user_profiles)]
pub struct PersonalityAnalysisRow {
    pub personality_analysis: String,
    pub personality_analysis_data: serde_json::Value,
    pub updated_at: DateTime<Utc>,
}

/// Updateable struct overwriting the writing-analysis fields.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = crate::schema::user_profiles)]
pub struct WritingAnalysisRow {
    pub writing_analysis: String,
    pub writing_analysis_data: serde_json::Value,
    pub writing_metrics: serde_json::Value,
    pub last_writing_prompt: String,
    pub last_writing_response: String,
    pub updated_at: DateTime<Utc>,
}

/// Database row for the writing_history_entries table.
///
/// Append-only: the store exposes insert and chronological listing, no
/// update or delete.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable, Serialize, derive_getters::Getters)]
#[diesel(table_name = crate::schema::writing_history_entries)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct WritingHistoryEntryRow {
    id: Uuid,
    profile_id: Uuid,
    prompt: String,
    response: String,
    analysis: String,
    optimistic_tone: i16,
    reflective_quality: i16,
    motivational_impact: i16,
    poetic_elements: i16,
    conversational_style: i16,
    created_at: DateTime<Utc>,
}

/// Insertable struct for one writing-test submission.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::writing_history_entries)]
pub struct NewWritingHistoryEntryRow {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub prompt: String,
    pub response: String,
    pub analysis: String,
    pub optimistic_tone: i16,
    pub reflective_quality: i16,
    pub motivational_impact: i16,
    pub poetic_elements: i16,
    pub conversational_style: i16,
}
