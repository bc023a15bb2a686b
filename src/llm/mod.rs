//! LLM Client Layer - chat-completion calls to the model provider
//!
//! This module provides:
//! - Message types for model communication
//! - ChatModel trait for the remote completion call
//! - GroqClient implementation
//! - MockChatModel for tests

pub mod client;
pub mod groq;
pub mod types;

pub use client::{ChatModel, MockChatModel};
pub use groq::GroqClient;
pub use types::{CompletionRequest, CompletionResponse, FinishReason, Message, Role, Usage};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_exports() {
        // Verify all public types are accessible
        let _role = Role::System;
        let _reason = FinishReason::Stop;
        let _msg = Message::user("hi");
    }
}
