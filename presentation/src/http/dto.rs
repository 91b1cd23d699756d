//! Request and response bodies

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `POST /api/v1/ask` request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

/// `POST /api/v1/ask` success body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerResponse {
    pub answer: String,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
}

impl AnswerResponse {
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }
}

/// Error body shared by all endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    /// Per-field messages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<BTreeMap<String, String>>,
    pub timestamp: i64,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_omits_empty_details() {
        let response = ErrorResponse {
            code: "INVALID_INPUT".to_string(),
            message: "Question cannot be empty".to_string(),
            details: None,
            timestamp: 0,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("details"));
    }
}
