//! Core data types for the Ghostwriter content service.
//!
//! Shared vocabulary used across the workspace: conversation messages and
//! generation requests, content kinds, quiz questions, and the five-metric
//! writing analysis group.

mod content;
mod message;
mod metrics;
mod observability;
mod quiz;
mod request;
mod role;
mod token_usage;

pub use content::{ContentKind, slugify};
pub use message::{Message, MessageBuilder};
pub use metrics::{MetricScore, MetricScoreBuilder, WritingMetric, WritingMetrics,
    WritingMetricsBuilder};
pub use observability::{init_observability, shutdown_observability};
pub use quiz::{QuizAnswer, QuizQuestion};
pub use request::{
    GenerateRequest, GenerateRequestBuilder, GenerateResponse, GenerateResponseBuilder,
    ResponseFormat,
};
pub use role::Role;
pub use token_usage::{TokenUsageData, TokenUsageDataBuilder};
