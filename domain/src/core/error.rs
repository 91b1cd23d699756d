//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Question cannot be empty")]
    EmptyQuestion,

    #[error("Question should be between {min} and {max} characters (got {actual})")]
    QuestionLength {
        min: usize,
        max: usize,
        actual: usize,
    },

    #[error("Invalid strategy chain: {0}")]
    InvalidChain(String),
}
