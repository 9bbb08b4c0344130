//! Client for OpenAI-compatible chat completion APIs.

use crate::openai::{ChatResponse, OpenAiError, conversions};
use async_trait::async_trait;
use ghostwriter_core::{GenerateRequest, GenerateResponse};
use ghostwriter_error::GenerationError;
use ghostwriter_interface::GhostwriterDriver;
use reqwest::Client;
use tracing::{debug, error, instrument};

/// Client for any OpenAI-compatible chat completions endpoint.
///
/// Handles the common chat format used by OpenAI, Groq, and other hosted
/// providers. No retry or backoff is applied; a failed call surfaces
/// directly to the caller.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    model: String,
    endpoint: String,
    provider_name: String,
}

impl OpenAiClient {
    /// Creates a new client.
    ///
    /// # Arguments
    ///
    /// * `api_key` - API key for bearer authentication
    /// * `model` - Default model identifier
    /// * `base_url` - API base, e.g. `https://api.openai.com/v1`
    /// * `provider_name` - Provider label for logging
    #[instrument(skip(api_key), fields(provider = %provider_name, model = %model))]
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String> + std::fmt::Debug + std::fmt::Display,
        base_url: &str,
        provider_name: impl Into<String> + std::fmt::Debug + std::fmt::Display,
    ) -> Self {
        let model = model.into();
        let provider_name = provider_name.into();
        let endpoint = format!("{}/chat/completions", base_url.trim_end_matches('/'));

        debug!(
            provider = %provider_name,
            model = %model,
            url = %endpoint,
            "Created OpenAI-compatible client"
        );

        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model,
            endpoint,
            provider_name,
        }
    }

    /// Generates a completion from the API.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the provider rejects it, or
    /// the response cannot be parsed.
    #[instrument(skip(self, req), fields(provider = %self.provider_name, model = %self.model))]
    pub async fn generate(&self, req: &GenerateRequest) -> Result<GenerateResponse, OpenAiError> {
        let chat_request = conversions::to_chat_request(req, &self.model)?;

        debug!(
            provider = %self.provider_name,
            message_count = chat_request.messages().len(),
            json_mode = req.response_format().is_json(),
            "Sending request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&chat_request)
            .send()
            .await
            .map_err(|e| {
                error!(provider = %self.provider_name, error = ?e, "HTTP request failed");
                OpenAiError::Http(format!("Request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(
                provider = %self.provider_name,
                status = %status,
                error = %error_text,
                "API error"
            );

            return Err(OpenAiError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            error!(provider = %self.provider_name, error = ?e, "Failed to parse response");
            OpenAiError::ResponseParsing(format!("Failed to parse JSON: {}", e))
        })?;

        debug!(
            provider = %self.provider_name,
            choices = chat_response.choices.len(),
            "Received response"
        );

        conversions::from_chat_response(&chat_response)
    }

    /// Returns the default model identifier.
    pub fn model_name(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl GhostwriterDriver for OpenAiClient {
    async fn generate(
        &self,
        request: &GenerateRequest,
    ) -> Result<GenerateResponse, GenerationError> {
        OpenAiClient::generate(self, request).await.map_err(Into::into)
    }

    fn name(&self) -> &str {
        &self.provider_name
    }
}
