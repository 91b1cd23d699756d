//! Infrastructure layer for answerbot
//!
//! This crate contains adapters that implement the ports defined in the
//! domain and application layers: the JSON question repository, the JSONL
//! answer transcript, and configuration file loading.

pub mod config;
pub mod logging;
pub mod repository;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileCacheConfig, FileConfig, FileLimitsConfig,
    FileLoggingConfig, FileQuestionsConfig, FileServerConfig,
};
pub use logging::JsonlAnswerLogger;
pub use repository::{JsonQuestionRepository, RepositoryError};
