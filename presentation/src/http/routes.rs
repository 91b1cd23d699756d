//! Question and health routes

use super::dto::{AnswerResponse, AskRequest, HealthResponse};
use super::error::ApiError;
use answerbot_application::QuestionAnswerer;
use answerbot_domain::QuestionBounds;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use std::sync::Arc;
use tracing::debug;

/// Shared state for the question routes
#[derive(Clone)]
pub struct AppState {
    pub answerer: Arc<dyn QuestionAnswerer>,
    pub bounds: QuestionBounds,
}

impl AppState {
    pub fn new(answerer: Arc<dyn QuestionAnswerer>, bounds: QuestionBounds) -> Self {
        Self { answerer, bounds }
    }
}

/// Question routes (nested under `/api/v1`)
pub fn ask_routes(state: AppState) -> Router {
    Router::new()
        .route("/ask", post(ask_handler))
        .with_state(state)
}

/// Health check route
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

async fn ask_handler(
    State(state): State<AppState>,
    payload: Result<Json<AskRequest>, JsonRejection>,
) -> Result<Json<AnswerResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| ApiError::Validation {
        message: format!("Malformed request body: {}", rejection.body_text()),
        details: None,
    })?;

    state
        .bounds
        .check(&request.question)
        .map_err(ApiError::from_bounds)?;

    debug!("Answering question over HTTP: {:?}", request.question);
    let answer = state.answerer.answer_question(&request.question)?;
    Ok(Json(AnswerResponse::new(answer.into_string())))
}

async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}
