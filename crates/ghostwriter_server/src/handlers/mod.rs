//! Request handlers.

pub mod analysis;
pub mod content;
pub mod profile;
pub mod public;
