//! Idea service
//!
//! Orchestrates both flows: screen the input, build the prompt, make one
//! gateway call, post-process, and record usage. Transport-agnostic; the
//! HTTP layer and the CLI both drive it.

use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;
use tracing::{Instrument, debug, info, info_span, warn};
use uuid::Uuid;

use crate::categorize::{self, Category};
use crate::config::{BoostConfig, Config, GenerateConfig};
use crate::finish::ensure_complete;
use crate::llm::{CompletionRequest, LlmClient};
use crate::prompts::{PromptComposer, PromptError, PromptPair};
use crate::stats::UsageTracker;
use crate::validation::ContentPolicy;

mod error;

pub use error::ServiceError;

/// Fixed message attached to every successful boost
pub const BOOST_SUCCESS_MESSAGE: &str = "Your idea has been successfully transformed into an actionable plan!";

/// Result of a successful boost
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoostOutcome {
    pub boosted_idea: String,
    pub category: Category,
    /// Wall-clock seconds spent categorizing and generating
    pub processing_time: f64,
    pub word_count: usize,
}

/// Handles idea requests against a single LLM gateway
pub struct IdeaService {
    llm: Arc<dyn LlmClient>,
    composer: PromptComposer,
    policy: ContentPolicy,
    stats: Arc<UsageTracker>,
    model: String,
    boost: BoostConfig,
    generate: GenerateConfig,
}

impl IdeaService {
    pub fn new(config: &Config, llm: Arc<dyn LlmClient>, stats: Arc<UsageTracker>) -> Result<Self, PromptError> {
        debug!(model = %config.llm.model, "IdeaService::new: called");
        Ok(Self {
            llm,
            composer: PromptComposer::new()?,
            policy: ContentPolicy::from_config(&config.content_policy),
            stats,
            model: config.llm.model.clone(),
            boost: config.boost.clone(),
            generate: config.generate.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn stats(&self) -> &Arc<UsageTracker> {
        &self.stats
    }

    /// Expand an idea into a full action plan
    ///
    /// Input is screened before anything else; a rejected idea never reaches
    /// the gateway and is not counted.
    pub async fn boost(&self, idea: &str) -> Result<BoostOutcome, ServiceError> {
        let span = info_span!("boost", request_id = %Uuid::now_v7());
        self.boost_inner(idea).instrument(span).await
    }

    async fn boost_inner(&self, idea: &str) -> Result<BoostOutcome, ServiceError> {
        debug!(idea_len = idea.len(), "boost: called");
        // Bounds apply to the trimmed text; the prompt gets the idea as submitted
        self.policy.check(idea).map_err(|rejection| {
            info!(%rejection, "boost: idea rejected");
            ServiceError::from(rejection)
        })?;

        let started = Instant::now();
        let category = categorize::classify(idea);
        let prompt = self.composer.boost(idea)?;

        let request = self.request(prompt, self.boost.temperature, self.boost.max_tokens, self.boost.timeout());
        let response = self.llm.complete(request).await.map_err(|e| {
            warn!(kind = e.kind(), error = %e, "boost: gateway call failed");
            ServiceError::from(e)
        })?;

        let boosted_idea = ensure_complete(&response.content);
        let word_count = boosted_idea.split_whitespace().count();
        let processing_time = started.elapsed().as_secs_f64();

        self.stats.record(category, processing_time);
        info!(%category, word_count, processing_time, "boost: idea transformed");

        Ok(BoostOutcome {
            boosted_idea,
            category,
            processing_time,
            word_count,
        })
    }

    /// Produce a short fresh idea for a domain
    ///
    /// Output is returned as the provider produced it; no completion
    /// post-processing and no usage recording.
    pub async fn generate(&self, domain: &str, keywords: &str, style: &str) -> Result<String, ServiceError> {
        debug!(%domain, %keywords, %style, "generate: called");
        if domain.trim().is_empty() {
            return Err(ServiceError::validation(
                "Domain cannot be empty",
                "Pick an area to generate ideas in, for example education or agriculture.",
            ));
        }

        let prompt = self.composer.generate(domain, keywords, style)?;
        let request = self.request(
            prompt,
            self.generate.temperature,
            self.generate.max_tokens,
            self.generate.timeout(),
        );
        let response = self.llm.complete(request).await.map_err(|e| {
            warn!(kind = e.kind(), error = %e, "generate: gateway call failed");
            ServiceError::from(e)
        })?;

        info!(domain = domain.trim(), "generate: idea produced");
        Ok(response.content.trim().to_string())
    }

    fn request(
        &self,
        prompt: PromptPair,
        temperature: f32,
        max_tokens: u32,
        timeout: std::time::Duration,
    ) -> CompletionRequest {
        CompletionRequest {
            system_prompt: prompt.system,
            user_prompt: prompt.user,
            model: self.model.clone(),
            temperature,
            max_tokens,
            timeout,
        }
    }
}
