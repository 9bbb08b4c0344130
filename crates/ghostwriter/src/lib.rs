//! Ghostwriter: an LLM-backed content generation and personalization
//! service.
//!
//! Facade crate re-exporting the workspace's public API. The binary of
//! the same name serves the HTTP surface (`ghostwriter serve`) and runs
//! migrations (`ghostwriter migrate`).

pub use ghostwriter_core::{
    ContentKind, GenerateRequest, GenerateResponse, Message, MetricScore, QuizAnswer,
    QuizQuestion, ResponseFormat, Role, TokenUsageData, WritingMetric, WritingMetrics, slugify,
};
pub use ghostwriter_database::{
    ContentChanges, ContentItemRow, ContentStore, NewContent, Pagination, ProfilePatch,
    ProfileStore, UserProfileRow, WritingAnalysisRecord, WritingHistoryEntryRow, create_pool,
    run_migrations,
};
pub use ghostwriter_error::{GhostwriterError, GhostwriterErrorKind, GhostwriterResult};
pub use ghostwriter_interface::{GhostwriterDriver, ImageProvider};
pub use ghostwriter_models::{ImageClient, OpenAiClient};
pub use ghostwriter_pipeline::{
    DraftGenerator, DraftRequest, GenerationSettings, PersonalityAnalysis, PersonalityAnalyzer,
    WritingAnalysisOutcome, WritingAnalyzer,
};
pub use ghostwriter_server::{AppState, GhostwriterConfig, SessionVerifier, create_router};
