//! Chat-completion request/response types
//!
//! `ChatCompletionPayload` and `ChatCompletionResult` mirror the OpenAI-style
//! wire format used by OpenRouter. `CompletionRequest` and
//! `CompletionResponse` are what the rest of the crate sees.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Everything needed for one completion call
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub system_prompt: String,
    pub user_prompt: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,

    /// Upper bound for the whole exchange, connect through body
    pub timeout: Duration,
}

/// Generated text plus whatever metadata the provider volunteered
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompletionResponse {
    pub content: String,
    pub finish_reason: Option<String>,
    pub usage: TokenUsage,
}

impl CompletionResponse {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    #[serde(default)]
    pub prompt_tokens: u64,
    #[serde(default)]
    pub completion_tokens: u64,
}

/// Message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// Request body sent verbatim to the provider
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionPayload {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
    pub n: u32,
}

impl From<&CompletionRequest> for ChatCompletionPayload {
    fn from(request: &CompletionRequest) -> Self {
        debug!(model = %request.model, max_tokens = request.max_tokens, "ChatCompletionPayload::from: called");
        Self {
            model: request.model.clone(),
            messages: vec![
                ChatMessage {
                    role: Role::System,
                    content: request.system_prompt.clone(),
                },
                ChatMessage {
                    role: Role::User,
                    content: request.user_prompt.clone(),
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            n: 1,
        }
    }
}

/// Provider response. Only `choices[0].message.content` is required.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResult {
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<TokenUsage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}
