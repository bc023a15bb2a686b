//! Output parsers turning a model response into plain values

use crate::error::{Result, TranslatrError};
use crate::llm::types::CompletionResponse;

/// Extracts the caller-facing value from a completion response
pub trait OutputParser: Send + Sync {
    fn parse(&self, response: &CompletionResponse) -> Result<String>;
}

/// Returns the response text verbatim
#[derive(Debug, Clone, Copy, Default)]
pub struct StrOutputParser;

impl OutputParser for StrOutputParser {
    fn parse(&self, response: &CompletionResponse) -> Result<String> {
        response
            .content
            .clone()
            .ok_or_else(|| TranslatrError::Parse("response has no text content".to_string()))
    }
}
