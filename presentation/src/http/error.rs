//! HTTP error mapping

use super::dto::ErrorResponse;
use answerbot_domain::DomainError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors surfaced to HTTP clients
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Request failed boundary validation
    #[error("{message}")]
    Validation {
        message: String,
        details: Option<BTreeMap<String, String>>,
    },

    /// Engine rejected the question
    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Validation failure on a single field
    pub fn field(field: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        ApiError::Validation {
            details: Some(BTreeMap::from([(field.to_string(), message.clone())])),
            message,
        }
    }

    /// Get the machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Validation { .. } => "VALIDATION_ERROR",
            ApiError::InvalidInput(_) => "INVALID_INPUT",
            ApiError::Internal(_) => "INTERNAL_SERVER_ERROR",
        }
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } | ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Map a bounds check failure on the `question` field
    pub fn from_bounds(error: DomainError) -> Self {
        match error {
            DomainError::EmptyQuestion => ApiError::field("question", error.to_string()),
            DomainError::QuestionLength { min, max, .. } => ApiError::field(
                "question",
                format!("Question should be between {} and {} characters", min, max),
            ),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::EmptyQuestion => ApiError::InvalidInput(error.to_string()),
            DomainError::QuestionLength { .. } => ApiError::from_bounds(error),
            DomainError::InvalidChain(_) => ApiError::Internal(error.to_string()),
        }
    }
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        let details = match err {
            ApiError::Validation { details, .. } => details.clone(),
            _ => None,
        };
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
            details,
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(&self));
        (status, body).into_response()
    }
}
