//! Idea screening
//!
//! Length bounds plus a substring denylist, applied before any provider call.
//! The denylist is a naive heuristic: it matches inside words, so "scampi"
//! trips "scam". It is not a moderation system.

use thiserror::Error;
use tracing::debug;

use crate::config::ContentPolicyConfig;

/// Why an idea was turned away
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("Idea cannot be empty")]
    Empty,

    #[error("Idea is too short ({len} characters, minimum {min})")]
    TooShort { len: usize, min: usize },

    #[error("Idea is too long ({len} characters, maximum {max})")]
    TooLong { len: usize, max: usize },

    #[error("Idea contains content that violates our guidelines")]
    Flagged { term: String },
}

impl Rejection {
    /// What the user can do about it
    pub fn suggestion(&self) -> String {
        match self {
            Rejection::Empty => "Describe your idea in a sentence or two and submit it again.".to_string(),
            Rejection::TooShort { min, .. } => format!(
                "Add more detail: what problem it solves and who it is for (at least {} characters).",
                min
            ),
            Rejection::TooLong { max, .. } => format!("Trim your idea to its core (at most {} characters).", max),
            Rejection::Flagged { .. } => {
                "Please rephrase your idea to focus on legal, constructive goals.".to_string()
            }
        }
    }

    pub fn is_content_policy(&self) -> bool {
        matches!(self, Rejection::Flagged { .. })
    }
}

/// Length and denylist rules for incoming ideas
#[derive(Debug, Clone)]
pub struct ContentPolicy {
    min_chars: usize,
    max_chars: usize,
    denylist: Vec<String>,
}

impl ContentPolicy {
    pub fn from_config(config: &ContentPolicyConfig) -> Self {
        Self {
            min_chars: config.min_chars,
            max_chars: config.max_chars,
            denylist: config
                .denylist
                .iter()
                .map(|term| term.trim().to_lowercase())
                .filter(|term| !term.is_empty())
                .collect(),
        }
    }

    /// Check an idea, returning the trimmed text on success
    pub fn check<'a>(&self, idea: &'a str) -> Result<&'a str, Rejection> {
        let trimmed = idea.trim();
        let len = trimmed.chars().count();
        debug!(len, "check: called");

        if trimmed.is_empty() {
            return Err(Rejection::Empty);
        }
        if len < self.min_chars {
            return Err(Rejection::TooShort {
                len,
                min: self.min_chars,
            });
        }
        if len > self.max_chars {
            return Err(Rejection::TooLong {
                len,
                max: self.max_chars,
            });
        }

        let lowered = trimmed.to_lowercase();
        if let Some(term) = self.denylist.iter().find(|term| lowered.contains(term.as_str())) {
            debug!(%term, "check: denylisted term found");
            return Err(Rejection::Flagged { term: term.clone() });
        }

        Ok(trimmed)
    }
}

impl Default for ContentPolicy {
    fn default() -> Self {
        Self::from_config(&ContentPolicyConfig::default())
    }
}
