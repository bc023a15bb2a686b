//! translatr - Translate text with a hosted language model
//!
//! A prompt template, a chat-completion call and an output parser are
//! composed into a `PromptChain`; the `Translator` runs the fixed translation
//! prompt through it.

pub mod config;
pub mod error;
pub mod llm;
pub mod prompt;
pub mod translate;

pub use error::{Result, TranslatrError};
