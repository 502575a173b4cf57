//! Request handling errors

use thiserror::Error;

use crate::llm::LlmError;
use crate::prompts::PromptError;
use crate::validation::Rejection;

/// Everything that can go wrong between accepting an idea and answering
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Malformed or out-of-bounds input
    #[error("{message}")]
    Validation { message: String, suggestion: String },

    /// Input tripped the denylist
    #[error("{message}")]
    ContentPolicy { message: String, suggestion: String },

    #[error(transparent)]
    Gateway(#[from] LlmError),

    #[error(transparent)]
    Prompt(#[from] PromptError),
}

impl From<Rejection> for ServiceError {
    fn from(rejection: Rejection) -> Self {
        let message = rejection.to_string();
        let suggestion = rejection.suggestion();
        if rejection.is_content_policy() {
            ServiceError::ContentPolicy { message, suggestion }
        } else {
            ServiceError::Validation { message, suggestion }
        }
    }
}

impl ServiceError {
    pub fn validation(message: impl Into<String>, suggestion: impl Into<String>) -> Self {
        ServiceError::Validation {
            message: message.into(),
            suggestion: suggestion.into(),
        }
    }

    /// Caused by the caller; resubmitting different input fixes it
    pub fn is_client_error(&self) -> bool {
        matches!(self, ServiceError::Validation { .. } | ServiceError::ContentPolicy { .. })
    }

    /// Caused by the provider or the path to it, whatever the kind
    pub fn is_gateway_failure(&self) -> bool {
        matches!(self, ServiceError::Gateway(_))
    }

    /// Short user-facing description; never leaks provider bodies
    pub fn user_message(&self) -> String {
        match self {
            ServiceError::Validation { message, .. } | ServiceError::ContentPolicy { message, .. } => {
                message.clone()
            }
            ServiceError::Gateway(LlmError::Timeout(_)) => "AI service timeout - please try again".to_string(),
            ServiceError::Gateway(LlmError::Network(_)) => {
                "Network error while contacting the AI service".to_string()
            }
            ServiceError::Gateway(LlmError::MalformedResponse(_)) => {
                "Invalid response format from AI service".to_string()
            }
            ServiceError::Gateway(LlmError::Upstream { status, .. }) => {
                format!("AI service request failed (status {})", status)
            }
            ServiceError::Gateway(LlmError::Unknown(_)) => "Unexpected error from the AI service".to_string(),
            ServiceError::Prompt(_) => "An unexpected error occurred while processing your idea".to_string(),
        }
    }

    /// Likely remediation, distinguished by failure kind
    pub fn suggestion(&self) -> String {
        match self {
            ServiceError::Validation { suggestion, .. } | ServiceError::ContentPolicy { suggestion, .. } => {
                suggestion.clone()
            }
            ServiceError::Gateway(LlmError::Timeout(_)) => {
                "The AI service is taking longer than usual. Please try again in a few moments.".to_string()
            }
            ServiceError::Gateway(LlmError::Network(_)) => {
                "Please check your internet connection and try again.".to_string()
            }
            ServiceError::Gateway(LlmError::MalformedResponse(_))
            | ServiceError::Gateway(LlmError::Upstream { .. })
            | ServiceError::Gateway(LlmError::Unknown(_)) => {
                "The AI service is having trouble right now. Please try again later.".to_string()
            }
            ServiceError::Prompt(_) => "Please try again. If the problem persists, contact support.".to_string(),
        }
    }
}
