//! Chat model trait and a scripted mock implementation

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::error::{Result, TranslatrError};
use crate::llm::types::{CompletionRequest, CompletionResponse};

/// Stateless chat model - each call is independent and blocks until complete
pub trait ChatModel: Send + Sync {
    /// Single completion request, exactly one remote call
    fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse>;

    /// Model identifier used when the request doesn't override it
    fn model(&self) -> &str;
}

impl<M: ChatModel + ?Sized> ChatModel for &M {
    fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse> {
        (**self).complete(request)
    }

    fn model(&self) -> &str {
        (**self).model()
    }
}

impl<M: ChatModel + ?Sized> ChatModel for Box<M> {
    fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse> {
        (**self).complete(request)
    }

    fn model(&self) -> &str {
        (**self).model()
    }
}

/// Chat model that replays scripted responses and records every request
///
/// Once the script is exhausted each call fails with a remote call error.
#[derive(Debug, Default)]
pub struct MockChatModel {
    responses: Mutex<VecDeque<Result<CompletionResponse>>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl MockChatModel {
    pub fn new(responses: Vec<Result<CompletionResponse>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Mock that answers once with the given text
    pub fn replying(text: impl Into<String>) -> Self {
        Self::new(vec![Ok(CompletionResponse::text(text))])
    }

    /// Mock that fails once with the given error
    pub fn failing(error: TranslatrError) -> Self {
        Self::new(vec![Err(error)])
    }

    /// Number of complete() calls seen so far
    pub fn call_count(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or(0)
    }

    /// Copies of every request received, in call order
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl ChatModel for MockChatModel {
    fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse> {
        self.requests
            .lock()
            .map_err(|e| TranslatrError::remote(format!("mock lock poisoned: {}", e)))?
            .push(request.clone());

        self.responses
            .lock()
            .map_err(|e| TranslatrError::remote(format!("mock lock poisoned: {}", e)))?
            .pop_front()
            .unwrap_or_else(|| Err(TranslatrError::remote("no scripted response left")))
    }

    fn model(&self) -> &str {
        "mock-model"
    }
}
