//! LLM types for chat-completion requests and responses
//!
//! This module defines the message types exchanged with the model provider.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Role of a message in the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A role-tagged message with literal content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }
}

/// Request to the model for one completion
///
/// Model name and sampling settings belong to the client's configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionRequest {
    pub messages: Vec<Message>,
}

impl CompletionRequest {
    /// Create a request from an ordered list of messages
    pub fn new(messages: Vec<Message>) -> Self {
        Self { messages }
    }
}

/// Response from the model, reduced to what the chain consumes
///
/// Every field is optional on the wire so a loose payload such as
/// `{"content": "Bonjour"}` deserializes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionResponse {
    pub content: Option<String>,
    pub finish_reason: Option<FinishReason>,
    pub model: Option<String>,
    pub usage: Usage,
}

impl CompletionResponse {
    /// Response carrying only generated text
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            finish_reason: Some(FinishReason::Stop),
            ..Default::default()
        }
    }
}

/// Reason why the model stopped generating
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    Stop,
    Length,
    #[serde(untagged)]
    Other(String),
}

impl FinishReason {
    pub fn from_wire(value: &str) -> Self {
        match value {
            "stop" => FinishReason::Stop,
            "length" => FinishReason::Length,
            other => FinishReason::Other(other.to_string()),
        }
    }

    /// True when the output was cut short by the token limit
    pub fn is_truncated(&self) -> bool {
        matches!(self, FinishReason::Length)
    }
}

/// Token usage statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Usage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl Usage {
    /// Create new usage stats
    pub fn new(input_tokens: u64, output_tokens: u64) -> Self {
        Self {
            input_tokens,
            output_tokens,
        }
    }

    /// Calculate total tokens
    pub fn total(&self) -> u64 {
        self.input_tokens + self.output_tokens
    }
}
