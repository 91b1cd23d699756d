//! Question value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A question to be answered (Value Object)
///
/// Holds the raw text exactly as the caller supplied it, including casing
/// and surrounding whitespace. The only invariant is that the text is not
/// blank; length limits belong to the boundary layers (see [`QuestionBounds`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Question {
    content: String,
}

impl Question {
    /// Create a new question, rejecting blank input
    pub fn new(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(DomainError::EmptyQuestion);
        }
        Ok(Self { content })
    }

    /// Get the raw question text
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl TryFrom<String> for Question {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Question::new(s)
    }
}

impl TryFrom<&str> for Question {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Question::new(s)
    }
}

impl From<Question> for String {
    fn from(q: Question) -> Self {
        q.content
    }
}

/// Accepted question length, in characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionBounds {
    pub min_len: usize,
    pub max_len: usize,
}

impl QuestionBounds {
    pub const DEFAULT_MIN_LEN: usize = 3;
    pub const DEFAULT_MAX_LEN: usize = 500;

    pub fn new(min_len: usize, max_len: usize) -> Self {
        Self { min_len, max_len }
    }

    /// Validate raw input against the bounds.
    ///
    /// Blank input is reported as [`DomainError::EmptyQuestion`] before the
    /// length is considered.
    pub fn check(&self, raw: &str) -> Result<(), DomainError> {
        if raw.trim().is_empty() {
            return Err(DomainError::EmptyQuestion);
        }
        let actual = raw.chars().count();
        if actual < self.min_len || actual > self.max_len {
            return Err(DomainError::QuestionLength {
                min: self.min_len,
                max: self.max_len,
                actual,
            });
        }
        Ok(())
    }
}

impl Default for QuestionBounds {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN_LEN, Self::DEFAULT_MAX_LEN)
    }
}
