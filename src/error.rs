//! Error types for translatr
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur while translating
#[derive(Debug, Error)]
pub enum TranslatrError {
    /// A template placeholder had no value in the supplied variables
    #[error("Missing template variable: {name}")]
    MissingVariable { name: String },

    /// The model provider call failed (network, timeout, auth, non-2xx)
    #[error("Remote call failed{}: {message}", status_suffix(.status))]
    RemoteCall { status: Option<u16>, message: String },

    /// The provider payload did not carry the expected text field
    #[error("Parse error: {0}")]
    Parse(String),

    /// Caller supplied blank or whitespace-only text
    #[error("Please enter some text.")]
    EmptyInput,

    /// Target language rejected by the language policy
    #[error("Invalid language: {0}")]
    InvalidLanguage(String),

    /// Malformed prompt template pattern
    #[error("Template error: {0}")]
    Template(String),

    /// Configuration problem (missing API key, invalid values)
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TranslatrError {
    /// Shorthand for a remote call failure without an HTTP status
    pub fn remote(message: impl Into<String>) -> Self {
        TranslatrError::RemoteCall {
            status: None,
            message: message.into(),
        }
    }

    /// True for problems with what the user typed, shown as warnings rather than failures
    pub fn is_user_input(&self) -> bool {
        matches!(self, TranslatrError::EmptyInput | TranslatrError::InvalidLanguage(_))
    }
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" ({})", s)).unwrap_or_default()
}

/// Result type alias for translatr operations
pub type Result<T> = std::result::Result<T, TranslatrError>;
