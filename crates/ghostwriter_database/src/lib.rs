//! Diesel/PostgreSQL persistence layer for Ghostwriter.
//!
//! The pool is constructed once from configuration and injected into
//! [`ContentStore`] and [`ProfileStore`]; uniqueness and ownership
//! invariants are enforced in the database (unique indexes, scoped
//! filters), not by application-side checks.

mod connection;
mod content_models;
mod content_store;
mod merge;
mod pagination;
mod profile_models;
mod profile_store;
pub mod schema;

pub use connection::{MIGRATIONS, PgPool, PgPooledConnection, create_pool, run_migrations};
pub use content_models::{
    ContentItemRow, NewContentItemRow, PublishContentItemRow, UpdateContentItemRow,
};
pub use content_store::{ContentChanges, ContentStore, NewContent, NewContentBuilder};
pub use merge::merge_string_lists;
pub use pagination::Pagination;
pub use profile_models::{
    NewUserProfileRow, NewWritingHistoryEntryRow, PersonalityAnalysisRow, UpdateUserProfileRow,
    UserProfileRow, WritingAnalysisRow, WritingHistoryEntryRow,
};
pub use profile_store::{
    ProfilePatch, ProfileStore, WritingAnalysisRecord, WritingAnalysisRecordBuilder,
};
