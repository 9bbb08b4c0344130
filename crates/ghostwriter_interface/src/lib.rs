//! Trait definitions for the Ghostwriter content service.
//!
//! The seams between orchestration and the outside world: a completion
//! backend and an image provider. Concrete clients live in
//! `ghostwriter_models`; orchestrators depend only on these traits.

mod driver;
mod image;

pub use driver::GhostwriterDriver;
pub use image::ImageProvider;
