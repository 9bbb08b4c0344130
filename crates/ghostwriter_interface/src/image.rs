//! The image search seam.

use async_trait::async_trait;
use ghostwriter_error::ImageError;
use std::sync::Arc;

/// A backend that resolves a text query to a browsable image URL.
///
/// Image lookups are best-effort decoration: a failure must never abort
/// content generation, so callers go through [`search_or_fallback`], which
/// recovers with the provider's configured fallback URL.
///
/// [`search_or_fallback`]: ImageProvider::search_or_fallback
#[async_trait]
pub trait ImageProvider: Send + Sync {
    /// Search for an image matching the query.
    async fn search(&self, query: &str) -> Result<String, ImageError>;

    /// Static URL returned when search fails.
    fn fallback_url(&self) -> &str;

    /// Search, recovering any failure with the fallback URL.
    async fn search_or_fallback(&self, query: &str) -> String {
        match self.search(query).await {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!(error = %e, query = %query, "Image search failed, using fallback");
                self.fallback_url().to_string()
            }
        }
    }
}

#[async_trait]
impl<T> ImageProvider for Arc<T>
where
    T: ImageProvider + ?Sized,
{
    async fn search(&self, query: &str) -> Result<String, ImageError> {
        (**self).search(query).await
    }

    fn fallback_url(&self) -> &str {
        (**self).fallback_url()
    }
}
