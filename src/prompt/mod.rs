//! Prompt System - templates, output parsers and the prompt chain
//!
//! This module provides message templates with `{{ name }}` placeholders, parsers
//! that pull text out of model responses, and `PromptChain`, which composes
//! both around a chat model.

mod chain;
mod parser;
mod template;

pub use chain::PromptChain;
pub use parser::{OutputParser, StrOutputParser};
pub use template::{MessagePattern, MessageTemplate, Variables, variables};
