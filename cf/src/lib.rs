//! CreativeFuse - idea boosting backend
//!
//! Turns a short idea into an expanded, India-focused action plan by making a
//! single call to an OpenAI-compatible chat-completion provider, and sorts the
//! idea into one of six topical buckets.
//!
//! # Modules
//!
//! - [`prompts`] - Prompt templates for the boost and generate flows
//! - [`llm`] - Gateway client trait and OpenAI-compatible implementation
//! - [`categorize`] - Keyword categorizer
//! - [`validation`] - Length and denylist screening
//! - [`finish`] - Completion heuristic for truncated plans
//! - [`stats`] - In-memory usage counters
//! - [`service`] - Flow orchestration
//! - [`server`] - HTTP API
//! - [`config`] - Configuration types and loading
//! - [`cli`] - Command-line interface

pub mod categorize;
pub mod cli;
pub mod config;
pub mod finish;
pub mod llm;
pub mod prompts;
pub mod server;
pub mod service;
pub mod stats;
pub mod validation;

pub use categorize::{Category, classify};
pub use config::{Config, LlmConfig};
pub use llm::{CompletionRequest, CompletionResponse, LlmClient, LlmError, OpenAIClient};
pub use prompts::{PromptComposer, PromptError, PromptPair};
pub use server::{ApiError, AppState};
pub use service::{BoostOutcome, IdeaService, ServiceError};
pub use stats::{UsageStats, UsageTracker};
pub use validation::{ContentPolicy, Rejection};
