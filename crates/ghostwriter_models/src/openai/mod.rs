//! OpenAI-compatible completion provider.

mod client;
mod conversions;
mod dto;

pub use client::OpenAiClient;
pub use conversions::{from_chat_response, to_chat_request};
pub use dto::{
    ChatChoice, ChatMessage, ChatRequest, ChatResponse, ChatUsage, OpenAiError,
    ResponseFormatSpec,
};
