//! Groq API client implementation
//!
//! Implements the ChatModel trait against Groq's OpenAI-compatible
//! chat-completions endpoint. One blocking HTTP request per call; nothing is
//! retried.

use std::time::Duration;

use log::{debug, warn};
use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde_json::{Value, json};

use crate::config::LlmConfig;
use crate::error::{Result, TranslatrError};
use crate::llm::client::ChatModel;
use crate::llm::types::{CompletionRequest, CompletionResponse, FinishReason, Usage};

/// Path appended to the configured base URL
const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";

/// Fallback error message when the provider gives nothing useful
const DEFAULT_STATUS_MESSAGE: &str = "Model provider request failed";

/// Groq chat-completions client
pub struct GroqClient {
    client: Client,
    api_key: String,
    endpoint: String,
    model: String,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
}

impl GroqClient {
    /// Create a new Groq client
    ///
    /// Reads the API key from the environment variable named in the config
    /// (GROQ_API_KEY by default)
    pub fn new(config: &LlmConfig) -> Result<Self> {
        let api_key = config.api_key()?;
        Self::with_api_key(api_key, config)
    }

    /// Create a client with an explicit API key
    pub fn with_api_key(api_key: impl Into<String>, config: &LlmConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| TranslatrError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            endpoint: format!(
                "{}{}",
                config.base_url.trim_end_matches('/'),
                CHAT_COMPLETIONS_PATH
            ),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    /// Full URL requests are posted to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Build the request body for the chat-completions API
    fn build_request(&self, request: &CompletionRequest) -> Value {
        let messages: Vec<Value> = request
            .messages
            .iter()
            .map(|m| {
                json!({
                    "role": m.role.as_str(),
                    "content": m.content
                })
            })
            .collect();

        let mut body = json!({
            "model": self.model,
            "messages": messages
        });

        if let Some(temperature) = self.temperature {
            body["temperature"] = json!(temperature);
        }

        if let Some(max_tokens) = self.max_tokens {
            body["max_tokens"] = json!(max_tokens);
        }

        body
    }

    /// Parse the API response into a CompletionResponse
    ///
    /// A missing message content is not an error here; the output parser
    /// decides what to do with an empty payload.
    fn parse_response(&self, body: &Value) -> CompletionResponse {
        let choice = &body["choices"][0];

        let content = choice["message"]["content"].as_str().map(str::to_string);
        let finish_reason = choice["finish_reason"].as_str().map(FinishReason::from_wire);

        let usage = body
            .get("usage")
            .map(|u| {
                Usage::new(
                    u["prompt_tokens"].as_u64().unwrap_or(0),
                    u["completion_tokens"].as_u64().unwrap_or(0),
                )
            })
            .unwrap_or_default();

        CompletionResponse {
            content,
            finish_reason,
            model: body["model"].as_str().map(str::to_string),
            usage,
        }
    }

    /// Send a request to the API and return the decoded JSON body
    fn send_request(&self, body: &Value) -> Result<Value> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(CONTENT_TYPE, "application/json")
            .json(body)
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    TranslatrError::remote(format!("Request timed out: {}", e))
                } else {
                    TranslatrError::remote(format!("Request failed: {}", e))
                }
            })?;

        let status = response.status();
        let body_text = response.text().map_err(|e| TranslatrError::RemoteCall {
            status: Some(status.as_u16()),
            message: format!("Failed to read response body: {}", e),
        })?;

        if !status.is_success() {
            let message = extract_error_message(&body_text).unwrap_or_else(|| {
                if !body_text.trim().is_empty() {
                    body_text.clone()
                } else if status.as_u16() == 429 {
                    "Rate limited".to_string()
                } else if status.is_server_error() {
                    "Server error".to_string()
                } else {
                    DEFAULT_STATUS_MESSAGE.to_string()
                }
            });
            warn!("Model provider returned {}: {}", status, message);
            return Err(TranslatrError::RemoteCall {
                status: Some(status.as_u16()),
                message,
            });
        }

        serde_json::from_str(&body_text)
            .map_err(|e| TranslatrError::Parse(format!("Response body is not JSON: {}", e)))
    }
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<Value>(body).ok()?;

    if let Some(msg) = parsed
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
    {
        return Some(msg.to_string());
    }

    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

impl ChatModel for GroqClient {
    fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse> {
        let body = self.build_request(request);
        debug!(
            "POST {} model={} messages={}",
            self.endpoint,
            body["model"],
            request.messages.len()
        );
        let response = self.send_request(&body)?;
        Ok(self.parse_response(&response))
    }

    fn model(&self) -> &str {
        &self.model
    }
}

impl std::fmt::Debug for GroqClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroqClient")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}
