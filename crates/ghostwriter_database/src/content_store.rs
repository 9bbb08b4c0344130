//! Ownership-scoped content library operations.

use crate::connection::{PgPool, checkout};
use crate::content_models::{
    ContentItemRow, NewContentItemRow, PublishContentItemRow, UpdateContentItemRow,
};
use crate::pagination::Pagination;
use crate::schema::content_items::dsl;
use chrono::Utc;
use diesel::prelude::*;
use ghostwriter_core::{ContentKind, slugify};
use ghostwriter_error::{
    ContentError, ContentErrorKind, DatabaseError, DatabaseErrorKind, GhostwriterResult,
};
use tracing::instrument;
use uuid::Uuid;

/// Fields for a new content item.
#[derive(Debug, Clone, derive_getters::Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct NewContent {
    /// Kind of artifact, fixed for the item's lifetime
    kind: ContentKind,
    /// Title; the slug is derived from it
    title: String,
    /// Generated or manually supplied body text
    body: String,
    /// Styling metadata
    #[builder(default)]
    tone: Option<String>,
    #[builder(default)]
    style: Option<String>,
    #[builder(default)]
    emotion: Option<String>,
    /// Decorative image resolved before the save
    #[builder(default)]
    image_url: Option<String>,
}

impl NewContent {
    /// Returns a builder for constructing NewContent.
    pub fn builder() -> NewContentBuilder {
        NewContentBuilder::default()
    }
}

/// Editable fields of a content item.
///
/// `None` fields are left untouched. The kind, owner, and slug are never
/// editable.
#[derive(Debug, Clone, Default)]
pub struct ContentChanges {
    pub title: Option<String>,
    pub body: Option<String>,
    pub tone: Option<String>,
    pub style: Option<String>,
    pub emotion: Option<String>,
    pub image_url: Option<String>,
}

/// Store for content items, scoped by ownership.
///
/// Every mutating operation filters by both id and author, so an item
/// belonging to another user is indistinguishable from one that does not
/// exist.
#[derive(Debug, Clone)]
pub struct ContentStore {
    pool: PgPool,
}

impl ContentStore {
    /// Creates a store backed by the given pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a content item for the author.
    ///
    /// Derives the slug from the title and starts the item unpublished.
    ///
    /// # Errors
    ///
    /// `InvalidInput` for an empty title or body; `Duplicate` when the
    /// author already has an item with the same title or slug.
    #[instrument(skip(self, content), fields(title = %content.title()))]
    pub fn create(
        &self,
        author_id: Uuid,
        content: &NewContent,
    ) -> GhostwriterResult<ContentItemRow> {
        if content.title().trim().is_empty() {
            return Err(ContentError::new(ContentErrorKind::InvalidInput(
                "title must not be empty".to_string(),
            ))
            .into());
        }
        if content.body().trim().is_empty() {
            return Err(ContentError::new(ContentErrorKind::InvalidInput(
                "body must not be empty".to_string(),
            ))
            .into());
        }

        let row = NewContentItemRow {
            id: Uuid::new_v4(),
            author_id,
            kind: content.kind().to_string(),
            title: content.title().clone(),
            body: content.body().clone(),
            tone: content.tone().clone(),
            style: content.style().clone(),
            emotion: content.emotion().clone(),
            image_url: content.image_url().clone(),
            slug: slugify(content.title()),
        };

        let mut conn = checkout(&self.pool)?;
        diesel::insert_into(dsl::content_items)
            .values(&row)
            .get_result::<ContentItemRow>(&mut conn)
            .map_err(|e| duplicate_or_database(e, content.title()))
    }

    /// List the author's items, newest first, optionally filtered by kind.
    #[instrument(skip(self))]
    pub fn list_by_author(
        &self,
        author_id: Uuid,
        kind: Option<ContentKind>,
        page: Pagination,
    ) -> GhostwriterResult<Vec<ContentItemRow>> {
        let mut conn = checkout(&self.pool)?;
        let mut query = dsl::content_items
            .filter(dsl::author_id.eq(author_id))
            .into_boxed();

        if let Some(kind) = kind {
            query = query.filter(dsl::kind.eq(kind.to_string()));
        }

        query
            .order(dsl::created_at.desc())
            .limit(page.limit())
            .offset(page.offset())
            .load::<ContentItemRow>(&mut conn)
            .map_err(|e| DatabaseError::from(e).into())
    }

    /// Fetch one item, ownership-checked.
    #[instrument(skip(self))]
    pub fn find_by_id(&self, id: Uuid, author_id: Uuid) -> GhostwriterResult<ContentItemRow> {
        let mut conn = checkout(&self.pool)?;
        dsl::content_items
            .filter(dsl::id.eq(id))
            .filter(dsl::author_id.eq(author_id))
            .first::<ContentItemRow>(&mut conn)
            .optional()
            .map_err(DatabaseError::from)?
            .ok_or_else(not_found)
    }

    /// Update an item's editable fields, ownership-checked.
    ///
    /// The slug is not recomputed when the title changes; published URLs
    /// stay stable.
    #[instrument(skip(self, changes))]
    pub fn update(
        &self,
        id: Uuid,
        author_id: Uuid,
        changes: &ContentChanges,
    ) -> GhostwriterResult<ContentItemRow> {
        let changeset = UpdateContentItemRow {
            title: changes.title.clone(),
            body: changes.body.clone(),
            tone: changes.tone.clone(),
            style: changes.style.clone(),
            emotion: changes.emotion.clone(),
            image_url: changes.image_url.clone(),
            updated_at: Utc::now(),
        };

        let mut conn = checkout(&self.pool)?;
        let title = changes.title.clone().unwrap_or_default();
        diesel::update(
            dsl::content_items
                .filter(dsl::id.eq(id))
                .filter(dsl::author_id.eq(author_id)),
        )
        .set(&changeset)
        .get_result::<ContentItemRow>(&mut conn)
        .optional()
        .map_err(|e| duplicate_or_database(e, &title))?
        .ok_or_else(not_found)
    }

    /// Delete an item, ownership-checked.
    ///
    /// Deleting an absent or foreign item is an error, not a no-op.
    #[instrument(skip(self))]
    pub fn delete(&self, id: Uuid, author_id: Uuid) -> GhostwriterResult<()> {
        let mut conn = checkout(&self.pool)?;
        let deleted = diesel::delete(
            dsl::content_items
                .filter(dsl::id.eq(id))
                .filter(dsl::author_id.eq(author_id)),
        )
        .execute(&mut conn)
        .map_err(DatabaseError::from)?;

        if deleted == 0 {
            return Err(not_found());
        }
        Ok(())
    }

    /// Publish an item, ownership-checked.
    ///
    /// First publish stamps `published_at`; publishing an already-published
    /// item is a no-op returning the stored row. The transition never
    /// reverts.
    #[instrument(skip(self))]
    pub fn publish(&self, id: Uuid, author_id: Uuid) -> GhostwriterResult<ContentItemRow> {
        let existing = self.find_by_id(id, author_id)?;
        if *existing.published() {
            return Ok(existing);
        }

        let now = Utc::now();
        let changeset = PublishContentItemRow {
            published: true,
            published_at: Some(now),
            updated_at: now,
        };

        let mut conn = checkout(&self.pool)?;
        diesel::update(
            dsl::content_items
                .filter(dsl::id.eq(id))
                .filter(dsl::author_id.eq(author_id)),
        )
        .set(&changeset)
        .get_result::<ContentItemRow>(&mut conn)
        .optional()
        .map_err(DatabaseError::from)?
        .ok_or_else(not_found)
    }

    /// List published items across all authors, newest publish first.
    #[instrument(skip(self))]
    pub fn list_published(
        &self,
        kind: Option<ContentKind>,
        page: Pagination,
    ) -> GhostwriterResult<Vec<ContentItemRow>> {
        let mut conn = checkout(&self.pool)?;
        let mut query = dsl::content_items
            .filter(dsl::published.eq(true))
            .into_boxed();

        if let Some(kind) = kind {
            query = query.filter(dsl::kind.eq(kind.to_string()));
        }

        query
            .order(dsl::published_at.desc())
            .limit(page.limit())
            .offset(page.offset())
            .load::<ContentItemRow>(&mut conn)
            .map_err(|e| DatabaseError::from(e).into())
    }

    /// Fetch one published item without ownership scoping.
    #[instrument(skip(self))]
    pub fn find_published(&self, id: Uuid) -> GhostwriterResult<ContentItemRow> {
        let mut conn = checkout(&self.pool)?;
        dsl::content_items
            .filter(dsl::id.eq(id))
            .filter(dsl::published.eq(true))
            .first::<ContentItemRow>(&mut conn)
            .optional()
            .map_err(DatabaseError::from)?
            .ok_or_else(not_found)
    }
}

fn not_found() -> ghostwriter_error::GhostwriterError {
    ContentError::new(ContentErrorKind::NotFoundOrUnauthorized).into()
}

/// Map a unique-index violation onto `Duplicate`; everything else stays a
/// database error.
fn duplicate_or_database(
    err: diesel::result::Error,
    title: &str,
) -> ghostwriter_error::GhostwriterError {
    let db = DatabaseError::from(err);
    if matches!(db.kind, DatabaseErrorKind::UniqueViolation(_)) {
        ContentError::new(ContentErrorKind::Duplicate {
            title: title.to_string(),
        })
        .into()
    } else {
        db.into()
    }
}
