//! User profile persistence with merge-preserving patches and append-only
//! writing history.

use crate::connection::{PgPool, checkout};
use crate::merge::merge_string_lists;
use crate::profile_models::{
    NewUserProfileRow, NewWritingHistoryEntryRow, PersonalityAnalysisRow, UpdateUserProfileRow,
    UserProfileRow, WritingAnalysisRow, WritingHistoryEntryRow,
};
use crate::schema::{user_profiles, writing_history_entries};
use chrono::Utc;
use diesel::prelude::*;
use ghostwriter_core::WritingMetrics;
use ghostwriter_error::{DatabaseError, GhostwriterResult};
use tracing::instrument;
use uuid::Uuid;

/// A partial profile update.
///
/// Merge rules, per field:
/// - scalar fields (`writing_style`, `target_audience`, `writing_goals`,
///   `experience_level`, `preferred_length`, `reference_authors`):
///   overwritten when present, untouched when `None`;
/// - array fields (`preferred_tones`, `favorite_topics`): unioned with the
///   stored list; existing order kept, unseen values appended, never
///   dropped.
///
/// Analysis fields and history are not patchable; they change only through
/// the analysis recording operations.
#[derive(Debug, Clone, Default)]
pub struct ProfilePatch {
    pub writing_style: Option<String>,
    pub target_audience: Option<String>,
    pub writing_goals: Option<String>,
    pub experience_level: Option<String>,
    pub preferred_length: Option<String>,
    pub reference_authors: Option<String>,
    pub preferred_tones: Option<Vec<String>>,
    pub favorite_topics: Option<Vec<String>>,
}

/// Everything persisted by one successful writing-sample analysis.
#[derive(Debug, Clone, derive_getters::Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct WritingAnalysisRecord {
    /// The writing-test prompt
    prompt: String,
    /// The user's sample
    response: String,
    /// Rendered Markdown analysis
    rendered: String,
    /// Conformed structured analysis
    data: serde_json::Value,
    /// The five-metric group
    metrics: WritingMetrics,
}

impl WritingAnalysisRecord {
    /// Returns a builder for constructing a WritingAnalysisRecord.
    pub fn builder() -> WritingAnalysisRecordBuilder {
        WritingAnalysisRecordBuilder::default()
    }
}

/// Store for user profiles and their writing history.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    pool: PgPool,
}

impl ProfileStore {
    /// Creates a store backed by the given pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch the user's profile, creating an empty one on first access.
    ///
    /// Creation races resolve at the unique index: `ON CONFLICT DO NOTHING`
    /// followed by a re-read, never check-then-insert.
    #[instrument(skip(self))]
    pub fn get_or_create(&self, user_id: Uuid) -> GhostwriterResult<UserProfileRow> {
        let mut conn = checkout(&self.pool)?;

        let row = NewUserProfileRow {
            id: Uuid::new_v4(),
            user_id,
        };
        diesel::insert_into(user_profiles::table)
            .values(&row)
            .on_conflict(user_profiles::user_id)
            .do_nothing()
            .execute(&mut conn)
            .map_err(DatabaseError::from)?;

        user_profiles::table
            .filter(user_profiles::user_id.eq(user_id))
            .first::<UserProfileRow>(&mut conn)
            .map_err(|e| DatabaseError::from(e).into())
    }

    /// Apply a merge-preserving patch and return the updated profile.
    #[instrument(skip(self, patch))]
    pub fn apply_patch(
        &self,
        user_id: Uuid,
        patch: &ProfilePatch,
    ) -> GhostwriterResult<UserProfileRow> {
        self.get_or_create(user_id)?;

        // List merges depend on the stored value, so the read and the
        // update share one transaction.
        let mut conn = checkout(&self.pool)?;
        let updated = conn.transaction::<UserProfileRow, DatabaseError, _>(|conn| {
            let existing = user_profiles::table
                .filter(user_profiles::user_id.eq(user_id))
                .first::<UserProfileRow>(conn)?;

            let changeset = UpdateUserProfileRow {
                writing_style: patch.writing_style.clone(),
                target_audience: patch.target_audience.clone(),
                writing_goals: patch.writing_goals.clone(),
                experience_level: patch.experience_level.clone(),
                preferred_length: patch.preferred_length.clone(),
                reference_authors: patch.reference_authors.clone(),
                preferred_tones: patch
                    .preferred_tones
                    .as_ref()
                    .map(|tones| merge_string_lists(existing.preferred_tones(), tones)),
                favorite_topics: patch
                    .favorite_topics
                    .as_ref()
                    .map(|topics| merge_string_lists(existing.favorite_topics(), topics)),
                updated_at: Utc::now(),
            };

            Ok(diesel::update(user_profiles::table.filter(user_profiles::user_id.eq(user_id)))
                .set(&changeset)
                .get_result::<UserProfileRow>(conn)?)
        })?;

        Ok(updated)
    }

    /// Overwrite the profile's personality-analysis fields.
    ///
    /// Called only after generation and parsing have succeeded, so a
    /// failed analysis never disturbs stored state.
    #[instrument(skip(self, rendered, data))]
    pub fn record_personality_analysis(
        &self,
        user_id: Uuid,
        rendered: &str,
        data: &serde_json::Value,
    ) -> GhostwriterResult<UserProfileRow> {
        // Ensure the row exists before updating it.
        self.get_or_create(user_id)?;

        let changeset = PersonalityAnalysisRow {
            personality_analysis: rendered.to_string(),
            personality_analysis_data: data.clone(),
            updated_at: Utc::now(),
        };

        let mut conn = checkout(&self.pool)?;
        diesel::update(user_profiles::table.filter(user_profiles::user_id.eq(user_id)))
            .set(&changeset)
            .get_result::<UserProfileRow>(&mut conn)
            .map_err(|e| DatabaseError::from(e).into())
    }

    /// Record a writing-sample analysis: overwrite the profile's current
    /// analysis fields and append one history entry, atomically.
    ///
    /// Prior history entries are never touched.
    #[instrument(skip(self, record))]
    pub fn record_writing_analysis(
        &self,
        user_id: Uuid,
        record: &WritingAnalysisRecord,
    ) -> GhostwriterResult<UserProfileRow> {
        let profile = self.get_or_create(user_id)?;
        let metrics_json = serde_json::to_value(record.metrics()).map_err(DatabaseError::from)?;

        let changeset = WritingAnalysisRow {
            writing_analysis: record.rendered().clone(),
            writing_analysis_data: record.data().clone(),
            writing_metrics: metrics_json,
            last_writing_prompt: record.prompt().clone(),
            last_writing_response: record.response().clone(),
            updated_at: Utc::now(),
        };

        let scores = record.metrics().scores();
        let entry = NewWritingHistoryEntryRow {
            id: Uuid::new_v4(),
            profile_id: *profile.id(),
            prompt: record.prompt().clone(),
            response: record.response().clone(),
            analysis: record.rendered().clone(),
            optimistic_tone: i16::from(scores[0].1),
            reflective_quality: i16::from(scores[1].1),
            motivational_impact: i16::from(scores[2].1),
            poetic_elements: i16::from(scores[3].1),
            conversational_style: i16::from(scores[4].1),
        };

        let mut conn = checkout(&self.pool)?;
        let updated = conn
            .transaction::<UserProfileRow, DatabaseError, _>(|conn| {
                let updated =
                    diesel::update(user_profiles::table.filter(user_profiles::user_id.eq(user_id)))
                        .set(&changeset)
                        .get_result::<UserProfileRow>(conn)?;

                diesel::insert_into(writing_history_entries::table)
                    .values(&entry)
                    .execute(conn)?;

                Ok(updated)
            })?;

        Ok(updated)
    }

    /// The user's writing-test history, oldest first.
    #[instrument(skip(self))]
    pub fn writing_history(&self, user_id: Uuid) -> GhostwriterResult<Vec<WritingHistoryEntryRow>> {
        let profile = self.get_or_create(user_id)?;
        let mut conn = checkout(&self.pool)?;

        writing_history_entries::table
            .filter(writing_history_entries::profile_id.eq(profile.id()))
            .order(writing_history_entries::created_at.asc())
            .load::<WritingHistoryEntryRow>(&mut conn)
            .map_err(|e| DatabaseError::from(e).into())
    }
}
