//! Message types for conversation history.

use crate::Role;
use serde::{Deserialize, Serialize};

/// A single message in a conversation with a completion provider.
///
/// # Examples
///
/// ```
/// use ghostwriter_core::{Message, Role};
///
/// let message = Message::user("Write me a story about tides.");
///
/// assert_eq!(*message.role(), Role::User);
/// assert!(message.content().contains("tides"));
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
pub struct Message {
    /// The role of the message sender
    role: Role,
    /// The text content of the message
    content: String,
}

impl Message {
    /// Creates a new message with the given role and content.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Creates a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Creates an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    /// Returns a builder for constructing a Message.
    pub fn builder() -> MessageBuilder {
        MessageBuilder::default()
    }
}
