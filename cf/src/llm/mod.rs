//! LLM gateway module for CreativeFuse
//!
//! Sends one chat-completion request per call to an OpenAI-compatible
//! provider and normalizes every failure into [`LlmError`].

use std::sync::Arc;

use eyre::Result;
use tracing::debug;

pub mod client;
mod error;
mod openai;
mod types;

pub use client::LlmClient;
pub use error::LlmError;
pub use openai::OpenAIClient;
pub use types::{
    ChatCompletionPayload, ChatCompletionResult, ChatMessage, Choice, ChoiceMessage, CompletionRequest,
    CompletionResponse, Role, TokenUsage,
};

use crate::config::LlmConfig;

/// Create the gateway client described by config
///
/// Fails when the API key environment variable is unset, so a misconfigured
/// process never starts serving.
pub fn create_client(config: &LlmConfig) -> Result<Arc<dyn LlmClient>> {
    debug!(base_url = %config.base_url, model = %config.model, "create_client: called");
    Ok(Arc::new(OpenAIClient::from_config(config)?))
}
