//! Request and response bodies.
//!
//! All JSON is camelCase; the content kind travels as `type` to match the
//! public API shape.

use chrono::{DateTime, Utc};
use ghostwriter_core::{ContentKind, QuizAnswer, WritingMetric, WritingMetrics};
use ghostwriter_database::{ContentItemRow, ProfilePatch, UserProfileRow, WritingHistoryEntryRow};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use uuid::Uuid;

/// Body of `POST /content`.
///
/// One of `prompt` (generate the body) or `content` (save a manual body)
/// is required.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContentRequest {
    /// What kind of artifact this is
    #[serde(rename = "type")]
    pub kind: ContentKind,
    pub title: String,
    /// Free-text generation prompt
    #[serde(default)]
    pub prompt: Option<String>,
    /// Manual body, used when no prompt is given
    #[serde(default)]
    pub content: Option<String>,
    /// Open styling map merged into the generation prompt
    #[serde(default)]
    pub parameters: BTreeMap<String, Value>,
    /// Optional image search query for a cover image
    #[serde(default)]
    pub image_query: Option<String>,
}

/// Query string of `GET /content` and `GET /published`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    #[serde(rename = "type")]
    pub kind: Option<ContentKind>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Body of `PUT /content/{id}`. Omitted fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContentRequest {
    pub title: Option<String>,
    /// New body text
    pub content: Option<String>,
    pub tone: Option<String>,
    pub style: Option<String>,
    pub emotion: Option<String>,
    pub image_url: Option<String>,
}

/// One content item, as returned by every content endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItemResponse {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub content: String,
    pub tone: Option<String>,
    pub style: Option<String>,
    pub emotion: Option<String>,
    pub image_url: Option<String>,
    pub slug: String,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&ContentItemRow> for ContentItemResponse {
    fn from(row: &ContentItemRow) -> Self {
        Self {
            id: *row.id(),
            kind: row.kind().clone(),
            title: row.title().clone(),
            content: row.body().clone(),
            tone: row.tone().clone(),
            style: row.style().clone(),
            emotion: row.emotion().clone(),
            image_url: row.image_url().clone(),
            slug: row.slug().clone(),
            published: *row.published(),
            published_at: *row.published_at(),
            created_at: *row.created_at(),
            updated_at: *row.updated_at(),
        }
    }
}

/// Body of `POST /analyze-personality`.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonalityRequest {
    /// The four answers, bound to questions by id, any order
    pub answers: Vec<QuizAnswer>,
}

/// Response of `POST /analyze-personality`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalityResponse {
    /// Rendered Markdown
    pub analysis: String,
    /// Conformed structured result
    pub analysis_data: Value,
}

/// Body of `POST /analyze-writing`.
#[derive(Debug, Clone, Deserialize)]
pub struct WritingRequest {
    pub prompt: String,
    pub response: String,
}

/// Response of `POST /analyze-writing`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WritingResponse {
    pub analysis: String,
    pub analysis_data: Value,
    pub metrics: WritingMetrics,
}

/// Body of `POST /profile`. Merge-preserving: array fields are unioned
/// with stored values, scalars overwrite only when present.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatchRequest {
    pub writing_style: Option<String>,
    pub target_audience: Option<String>,
    pub writing_goals: Option<String>,
    pub experience_level: Option<String>,
    pub preferred_length: Option<String>,
    pub reference_authors: Option<String>,
    pub preferred_tones: Option<Vec<String>>,
    pub favorite_topics: Option<Vec<String>>,
}

impl From<ProfilePatchRequest> for ProfilePatch {
    fn from(req: ProfilePatchRequest) -> Self {
        ProfilePatch {
            writing_style: req.writing_style,
            target_audience: req.target_audience,
            writing_goals: req.writing_goals,
            experience_level: req.experience_level,
            preferred_length: req.preferred_length,
            reference_authors: req.reference_authors,
            preferred_tones: req.preferred_tones,
            favorite_topics: req.favorite_topics,
        }
    }
}

/// One past writing-test submission.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WritingHistoryEntryResponse {
    pub prompt: String,
    pub response: String,
    pub analysis: String,
    /// The five metric scores, flattened to numbers
    pub metrics: BTreeMap<String, i16>,
    pub created_at: DateTime<Utc>,
}

impl From<&WritingHistoryEntryRow> for WritingHistoryEntryResponse {
    fn from(row: &WritingHistoryEntryRow) -> Self {
        let mut metrics = BTreeMap::new();
        for (metric, score) in [
            (WritingMetric::OptimisticTone, *row.optimistic_tone()),
            (WritingMetric::ReflectiveQuality, *row.reflective_quality()),
            (WritingMetric::MotivationalImpact, *row.motivational_impact()),
            (WritingMetric::PoeticElements, *row.poetic_elements()),
            (WritingMetric::ConversationalStyle, *row.conversational_style()),
        ] {
            metrics.insert(metric.to_string(), score);
        }

        Self {
            prompt: row.prompt().clone(),
            response: row.response().clone(),
            analysis: row.analysis().clone(),
            metrics,
            created_at: *row.created_at(),
        }
    }
}

/// Response of `GET /profile` and `POST /profile`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub user_id: Uuid,
    pub writing_style: Option<String>,
    pub target_audience: Option<String>,
    pub writing_goals: Option<String>,
    pub experience_level: Option<String>,
    pub preferred_length: Option<String>,
    pub reference_authors: Option<String>,
    pub preferred_tones: Vec<String>,
    pub favorite_topics: Vec<String>,
    pub personality_analysis: Option<String>,
    pub personality_analysis_data: Option<Value>,
    pub writing_analysis: Option<String>,
    pub writing_analysis_data: Option<Value>,
    pub writing_metrics: Option<Value>,
    pub last_writing_prompt: Option<String>,
    pub last_writing_response: Option<String>,
    /// Past submissions, oldest first
    pub writing_history: Vec<WritingHistoryEntryResponse>,
}

impl ProfileResponse {
    /// Assemble a response from the profile row and its history.
    pub fn assemble(profile: &UserProfileRow, history: &[WritingHistoryEntryRow]) -> Self {
        Self {
            user_id: *profile.user_id(),
            writing_style: profile.writing_style().clone(),
            target_audience: profile.target_audience().clone(),
            writing_goals: profile.writing_goals().clone(),
            experience_level: profile.experience_level().clone(),
            preferred_length: profile.preferred_length().clone(),
            reference_authors: profile.reference_authors().clone(),
            preferred_tones: profile.preferred_tones().clone(),
            favorite_topics: profile.favorite_topics().clone(),
            personality_analysis: profile.personality_analysis().clone(),
            personality_analysis_data: profile.personality_analysis_data().clone(),
            writing_analysis: profile.writing_analysis().clone(),
            writing_analysis_data: profile.writing_analysis_data().clone(),
            writing_metrics: profile.writing_metrics().clone(),
            last_writing_prompt: profile.last_writing_prompt().clone(),
            last_writing_response: profile.last_writing_response().clone(),
            writing_history: history.iter().map(Into::into).collect(),
        }
    }
}
