//! Content kinds and slug derivation.

use serde::{Deserialize, Serialize};

/// The kind of artifact a user can generate.
///
/// Fixed at creation time; the store never changes an item's kind.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Blog,
    Story,
    Speech,
}

impl ContentKind {
    /// Human phrase used in prompt construction ("You are a professional
    /// {phrase} writer").
    pub fn phrase(&self) -> &'static str {
        match self {
            ContentKind::Blog => "blog post",
            ContentKind::Story => "short story",
            ContentKind::Speech => "speech",
        }
    }
}

/// Derives a URL slug from a title.
///
/// Lowercases, transliterates, and collapses non-alphanumeric runs into
/// single hyphens.
///
/// # Examples
///
/// ```
/// use ghostwriter_core::slugify;
///
/// assert_eq!(slugify("Test"), "test");
/// assert_eq!(slugify("Hello, World!"), "hello-world");
/// assert_eq!(slugify("  Drafts & Revisions  "), "drafts-revisions");
/// ```
pub fn slugify(title: &str) -> String {
    slug::slugify(title)
}
