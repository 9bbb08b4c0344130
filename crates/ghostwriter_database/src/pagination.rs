//! Listing pagination.

/// Page window for listing queries.
///
/// # Examples
///
/// ```
/// use ghostwriter_database::Pagination;
///
/// let page = Pagination::new(Some(500), None);
/// assert_eq!(page.limit(), 100);
/// assert_eq!(page.offset(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    limit: i64,
    offset: i64,
}

impl Pagination {
    /// Largest page a single request may ask for.
    pub const MAX_LIMIT: i64 = 100;

    /// Page size when the caller does not specify one.
    pub const DEFAULT_LIMIT: i64 = 20;

    /// Build a page window, clamping the limit to `1..=MAX_LIMIT`.
    pub fn new(limit: Option<i64>, offset: Option<i64>) -> Self {
        let limit = limit
            .unwrap_or(Self::DEFAULT_LIMIT)
            .clamp(1, Self::MAX_LIMIT);
        let offset = offset.unwrap_or(0).max(0);
        Self { limit, offset }
    }

    /// Number of rows to return.
    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Number of rows to skip.
    pub fn offset(&self) -> i64 {
        self.offset
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(None, None)
    }
}
