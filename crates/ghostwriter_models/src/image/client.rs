//! Client for the image search API.

use crate::image::ImageSearchResponse;
use async_trait::async_trait;
use ghostwriter_error::{ImageError, ImageErrorKind};
use ghostwriter_interface::ImageProvider;
use reqwest::Client;
use tracing::{debug, instrument, warn};

/// Client for an Unsplash-style photo search endpoint.
///
/// Searches are decoration only. Callers use
/// [`ImageProvider::search_or_fallback`] so a failed lookup degrades to the
/// configured fallback URL instead of failing the surrounding request.
#[derive(Debug, Clone)]
pub struct ImageClient {
    client: Client,
    api_key: String,
    base_url: String,
    fallback_url: String,
}

impl ImageClient {
    /// Creates a new image search client.
    #[instrument(skip(api_key), fields(base_url = %base_url))]
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String> + std::fmt::Debug + std::fmt::Display,
        fallback_url: impl Into<String> + std::fmt::Debug,
    ) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into(),
            fallback_url: fallback_url.into(),
        }
    }
}

#[async_trait]
impl ImageProvider for ImageClient {
    #[instrument(skip(self))]
    async fn search(&self, query: &str) -> Result<String, ImageError> {
        let url = format!("{}/search/photos", self.base_url.trim_end_matches('/'));

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Client-ID {}", self.api_key))
            .query(&[("query", query), ("per_page", "1")])
            .send()
            .await
            .map_err(|e| {
                warn!(error = ?e, "Image search request failed");
                ImageError::new(ImageErrorKind::Http(format!("Request failed: {}", e)))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Image API error");
            return Err(ImageError::new(ImageErrorKind::Api {
                status: status.as_u16(),
                message: error_text,
            }));
        }

        let payload: ImageSearchResponse = response.json().await.map_err(|e| {
            ImageError::new(ImageErrorKind::ResponseParsing(format!(
                "Failed to parse JSON: {}",
                e
            )))
        })?;

        debug!(results = payload.results.len(), "Image search returned");

        payload
            .results
            .first()
            .map(|hit| hit.urls.regular.clone())
            .ok_or_else(|| ImageError::new(ImageErrorKind::NoResults))
    }

    fn fallback_url(&self) -> &str {
        &self.fallback_url
    }
}
