//! Diesel models for the content library.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;
use uuid::Uuid;

/// Database row for the content_items table.
///
/// One generated or manually saved artifact. The kind and author are fixed
/// at creation; neither appears in the changeset type.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable, Serialize, derive_getters::Getters)]
#[diesel(table_name = crate::schema::content_items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ContentItemRow {
    id: Uuid,
    author_id: Uuid,
    kind: String,
    title: String,
    body: String,
    tone: Option<String>,
    style: Option<String>,
    emotion: Option<String>,
    image_url: Option<String>,
    slug: String,
    published: bool,
    published_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Insertable struct for creating a content item.
///
/// The slug is derived from the title before insertion; `published` starts
/// false and `published_at` null.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::content_items)]
pub struct NewContentItemRow {
    pub id: Uuid,
    pub author_id: Uuid,
    pub kind: String,
    pub title: String,
    pub body: String,
    pub tone: Option<String>,
    pub style: Option<String>,
    pub emotion: Option<String>,
    pub image_url: Option<String>,
    pub slug: String,
}

/// Updateable struct for editing a content item.
///
/// Only title, body, styling, and image are editable; the slug is assigned
/// at creation and stays stable across title edits so published URLs do
/// not move.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = crate::schema::content_items)]
pub struct UpdateContentItemRow {
    pub title: Option<String>,
    pub body: Option<String>,
    pub tone: Option<String>,
    pub style: Option<String>,
    pub emotion: Option<String>,
    pub image_url: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Updateable struct for the publish transition.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = crate::schema::content_items)]
pub struct PublishContentItemRow {
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}
