//! Type conversions between Ghostwriter and OpenAI formats.

use crate::openai::{ChatMessage, ChatRequest, ChatResponse, OpenAiError, ResponseFormatSpec};
use ghostwriter_core::{GenerateRequest, GenerateResponse, TokenUsageData};

/// Converts a Ghostwriter GenerateRequest to OpenAI chat format.
///
/// The request's own model takes precedence over the client default.
pub fn to_chat_request(req: &GenerateRequest, default_model: &str) -> Result<ChatRequest, OpenAiError> {
    if req.messages().is_empty() {
        return Err(OpenAiError::InvalidRequest(
            "Request contains no messages".to_string(),
        ));
    }

    let messages: Vec<ChatMessage> = req
        .messages()
        .iter()
        .map(|msg| ChatMessage {
            role: msg.role().as_str().to_string(),
            content: msg.content().clone(),
        })
        .collect();

    let model = req
        .model()
        .clone()
        .unwrap_or_else(|| default_model.to_string());

    let mut builder = ChatRequest::builder();
    builder.model(model).messages(messages);

    if let Some(max_tokens) = req.max_tokens() {
        builder.max_tokens(*max_tokens);
    }

    if let Some(temp) = req.temperature() {
        builder.temperature(*temp);
    }

    if req.response_format().is_json() {
        builder.response_format(Some(ResponseFormatSpec::json_object()));
    }

    builder
        .build()
        .map_err(|e| OpenAiError::Builder(format!("Failed to build request: {}", e)))
}

/// Converts an OpenAI chat response to a Ghostwriter GenerateResponse.
pub fn from_chat_response(response: &ChatResponse) -> Result<GenerateResponse, OpenAiError> {
    let text = response
        .choices
        .first()
        .map(|choice| choice.message.content.clone())
        .ok_or_else(|| OpenAiError::ResponseParsing("No choices in response".to_string()))?;

    // Extract token usage if available
    let usage = response.usage.as_ref().and_then(|u| {
        match (u.prompt_tokens, u.completion_tokens, u.total_tokens) {
            (Some(input), Some(output), Some(total)) => {
                Some(TokenUsageData::new(input as u64, output as u64, total as u64))
            }
            _ => None,
        }
    });

    Ok(GenerateResponse::new(text, usage))
}
