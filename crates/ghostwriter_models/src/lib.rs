//! External service clients for the Ghostwriter content service.
//!
//! Concrete implementations of the `ghostwriter_interface` seams: an
//! OpenAI-compatible completion client and an image search client.

pub mod image;
pub mod openai;

pub use image::ImageClient;
pub use openai::OpenAiClient;
