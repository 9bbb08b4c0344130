//! Image search provider.

mod client;
mod dto;

pub use client::ImageClient;
pub use dto::{ImageResult, ImageSearchResponse, ImageUrls};
