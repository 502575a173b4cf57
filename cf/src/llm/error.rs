//! LLM gateway error types

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during a chat-completion call
///
/// Every variant is reported to the caller as-is. Nothing here is retried.
#[derive(Debug, Clone, Error)]
pub enum LlmError {
    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Upstream error {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl LlmError {
    /// Classify a transport failure from reqwest
    pub fn from_transport(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            LlmError::Timeout(timeout)
        } else if err.is_connect() || err.is_request() || err.is_body() {
            LlmError::Network(err.to_string())
        } else if err.is_decode() {
            LlmError::MalformedResponse(err.to_string())
        } else {
            LlmError::Unknown(err.to_string())
        }
    }

    /// Stable machine-readable name for logs
    pub fn kind(&self) -> &'static str {
        match self {
            LlmError::Timeout(_) => "timeout",
            LlmError::Network(_) => "network_error",
            LlmError::MalformedResponse(_) => "malformed_response",
            LlmError::Upstream { .. } => "upstream_error",
            LlmError::Unknown(_) => "unknown_error",
        }
    }
}
