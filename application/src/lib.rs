//! Application layer for answerbot
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::EngineConfig;
pub use ports::{
    answer_logger::{AnswerEvent, AnswerLogger, NoAnswerLogger},
    question_answerer::{CacheStats, QuestionAnswerer},
};
pub use use_cases::{
    answer_question::AnswerQuestionUseCase,
    assemble_answerer,
    cached_answer::CachedAnswerer,
};
