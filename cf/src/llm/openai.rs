//! OpenAI-compatible chat-completion client
//!
//! Talks to any provider exposing `POST {base_url}/chat/completions` with the
//! OpenAI wire format (OpenRouter by default). One attempt per call, bounded
//! by the request's timeout.

use async_trait::async_trait;
use eyre::Result;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use super::{ChatCompletionPayload, ChatCompletionResult, CompletionRequest, CompletionResponse, LlmClient, LlmError};
use crate::config::LlmConfig;

/// OpenAI-compatible API client
pub struct OpenAIClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenAIClient {
    /// Create a client from configuration, reading the key from the environment
    pub fn from_config(config: &LlmConfig) -> Result<Self> {
        debug!(base_url = %config.base_url, api_key_env = %config.api_key_env, "from_config: called");
        let api_key = config.api_key()?;
        Self::new(&config.base_url, api_key)
    }

    pub fn new(base_url: &str, api_key: impl Into<String>) -> Result<Self> {
        // Timeouts are applied per request; see CompletionRequest::timeout.
        let http = Client::builder().user_agent(concat!("creativefuse/", env!("CARGO_PKG_VERSION"))).build()?;

        Ok(Self {
            api_key: api_key.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// Pull the generated text out of a provider body
    ///
    /// A body that is not JSON, has no choices, or has no string content is a
    /// contract violation and is reported, never defaulted.
    fn parse_response(body: &str) -> Result<CompletionResponse, LlmError> {
        let result: ChatCompletionResult =
            serde_json::from_str(body).map_err(|e| LlmError::MalformedResponse(e.to_string()))?;

        let choice = result
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::MalformedResponse("response has no choices".to_string()))?;

        let content = choice
            .message
            .content
            .ok_or_else(|| LlmError::MalformedResponse("first choice has no message content".to_string()))?;

        Ok(CompletionResponse {
            content,
            finish_reason: choice.finish_reason,
            usage: result.usage.unwrap_or_default(),
        })
    }
}

#[async_trait]
impl LlmClient for OpenAIClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        debug!(model = %request.model, max_tokens = request.max_tokens, timeout = ?request.timeout, "complete: called");
        let payload = ChatCompletionPayload::from(&request);

        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&payload)
            .timeout(request.timeout)
            .send()
            .await
            .map_err(|e| LlmError::from_transport(e, request.timeout))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| LlmError::from_transport(e, request.timeout))?;

        if status != StatusCode::OK {
            warn!(status = status.as_u16(), "complete: provider returned non-200");
            return Err(LlmError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let parsed = Self::parse_response(&body)?;
        debug!(
            finish_reason = ?parsed.finish_reason,
            prompt_tokens = parsed.usage.prompt_tokens,
            completion_tokens = parsed.usage.completion_tokens,
            "complete: success"
        );
        Ok(parsed)
    }
}
