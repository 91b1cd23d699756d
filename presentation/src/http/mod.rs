//! HTTP boundary
//!
//! - `POST /api/v1/ask` answers a question
//! - `GET /health` reports liveness and version
//!
//! Request validation (blank, length bounds, malformed JSON) happens here,
//! before the answering engine is invoked.

mod config;
mod dto;
mod error;
mod routes;
mod server;

pub use config::HttpServerConfig;
pub use dto::{AnswerResponse, AskRequest, ErrorResponse, HealthResponse};
pub use error::ApiError;
pub use routes::{AppState, ask_routes, health_routes};
pub use server::HttpServer;
