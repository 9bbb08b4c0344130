//! Data transfer objects for the image search API.

use serde::Deserialize;

/// Image search response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageSearchResponse {
    /// Matching images, best first
    #[serde(default)]
    pub results: Vec<ImageResult>,
}

/// One image search hit.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageResult {
    /// Renditions by size
    pub urls: ImageUrls,
}

/// Rendition URLs for one image.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageUrls {
    /// Browsable medium-size rendition
    pub regular: String,
    /// Thumbnail rendition
    #[serde(default)]
    pub small: Option<String>,
}
