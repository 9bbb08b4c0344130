//! Generation and analysis orchestration for Ghostwriter.
//!
//! Turns user parameters into prompts, drives the completion backend, and
//! validates structured replies against schema templates before rendering.
//! Nothing in this crate touches a store; persistence is sequenced by the
//! caller after orchestration succeeds.

mod conform;
mod draft;
mod extract;
mod personality;
mod prompt;
mod render;
mod settings;
mod structured;
mod template;
mod writing;

pub use conform::conform_to_template;
pub use draft::{DraftGenerator, DraftRequest, DraftRequestBuilder};
pub use extract::{extract_json, parse_json_object};
pub use personality::{PersonalityAnalysis, PersonalityAnalyzer, canonical_order};
pub use prompt::{draft_messages, personality_messages, writing_messages};
pub use render::{render_personality, render_writing};
pub use settings::{GenerationSettings, GenerationSettingsBuilder};
pub use structured::generate_structured;
pub use template::{personality_template, writing_template};
pub use writing::{WritingAnalysisOutcome, WritingAnalyzer};
