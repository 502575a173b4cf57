//! HTTP error responses

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::{error, warn};

use super::models::ErrorBody;
use crate::service::ServiceError;

/// Failed request, rendered as `{success, message, error_type, suggestion}`
#[derive(Debug, Clone)]
pub struct ApiError {
    pub status: StatusCode,
    pub error_type: &'static str,
    pub message: String,
    pub suggestion: String,
}

impl ApiError {
    fn new(status: StatusCode, error_type: &'static str, message: String, suggestion: String) -> Self {
        Self {
            status,
            error_type,
            message,
            suggestion,
        }
    }

    /// Map a boost failure: bad input is 400, provider trouble 503, the rest 500
    pub fn boost(err: ServiceError) -> Self {
        let message = err.user_message();
        let suggestion = err.suggestion();
        match &err {
            ServiceError::Validation { .. } => {
                Self::new(StatusCode::BAD_REQUEST, "validation_error", message, suggestion)
            }
            ServiceError::ContentPolicy { .. } => {
                Self::new(StatusCode::BAD_REQUEST, "content_policy_error", message, suggestion)
            }
            _ if err.is_gateway_failure() => {
                warn!(error = %err, "boost: AI service unavailable");
                Self::new(StatusCode::SERVICE_UNAVAILABLE, "service_error", message, suggestion)
            }
            _ => {
                error!(error = %err, "boost: internal error");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", message, suggestion)
            }
        }
    }

    /// Map a generate failure: bad input is 400, anything else 500
    pub fn generate(err: ServiceError) -> Self {
        let message = err.user_message();
        let suggestion = err.suggestion();
        match &err {
            ServiceError::Validation { .. } => {
                Self::new(StatusCode::BAD_REQUEST, "validation_error", message, suggestion)
            }
            ServiceError::ContentPolicy { .. } => {
                Self::new(StatusCode::BAD_REQUEST, "content_policy_error", message, suggestion)
            }
            _ => {
                error!(error = %err, "generate: idea generation failed");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "generation_error",
                    format!("Failed to generate idea: {}", message),
                    suggestion,
                )
            }
        }
    }

    /// Body that could not be read as the expected JSON
    pub fn bad_json(rejection: JsonRejection) -> Self {
        warn!(error = %rejection.body_text(), "request body rejected");
        Self::new(
            StatusCode::BAD_REQUEST,
            "validation_error",
            format!("Invalid request body: {}", rejection.body_text()),
            "Send a JSON object with the required fields.".to_string(),
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            success: false,
            message: self.message,
            error_type: self.error_type.to_string(),
            suggestion: self.suggestion,
        };
        (self.status, Json(body)).into_response()
    }
}
