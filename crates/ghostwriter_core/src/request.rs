//! Request and response types for text generation.

use crate::{Message, TokenUsageData};
use serde::{Deserialize, Serialize};

/// How the completion provider should shape its reply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    /// Free-form text completion
    #[default]
    Text,
    /// Constrained JSON-object completion
    Json,
}

impl ResponseFormat {
    /// True when the provider should be asked for a JSON object.
    pub fn is_json(&self) -> bool {
        matches!(self, ResponseFormat::Json)
    }
}

/// A generation request for a completion provider.
///
/// # Examples
///
/// ```
/// use ghostwriter_core::{GenerateRequest, Message, ResponseFormat};
///
/// let request = GenerateRequest::builder()
///     .messages(vec![Message::user("Hello")])
///     .temperature(Some(0.7))
///     .build()
///     .expect("valid request");
///
/// assert_eq!(request.messages().len(), 1);
/// assert_eq!(*request.response_format(), ResponseFormat::Text);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
pub struct GenerateRequest {
    /// Ordered conversation messages, system instruction first
    messages: Vec<Message>,
    /// Provider model identifier; the client's default applies when unset
    #[builder(default)]
    model: Option<String>,
    /// Token budget for the completion
    #[builder(default)]
    max_tokens: Option<u32>,
    /// Sampling temperature
    #[builder(default)]
    temperature: Option<f32>,
    /// Free text or constrained JSON
    #[builder(default)]
    response_format: ResponseFormat,
}

impl GenerateRequest {
    /// Returns a builder for constructing a GenerateRequest.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }
}

/// The reply from a completion provider.
///
/// Two requests with identical input may produce different text; the model
/// is stochastic and no caching happens at this layer.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
pub struct GenerateResponse {
    /// The completion text, unmodified
    text: String,
    /// Token accounting when the provider reports it
    #[builder(default)]
    usage: Option<TokenUsageData>,
}

impl GenerateResponse {
    /// Creates a new response from completion text and optional usage.
    pub fn new(text: impl Into<String>, usage: Option<TokenUsageData>) -> Self {
        Self {
            text: text.into(),
            usage,
        }
    }

    /// Returns a builder for constructing a GenerateResponse.
    pub fn builder() -> GenerateResponseBuilder {
        GenerateResponseBuilder::default()
    }
}
