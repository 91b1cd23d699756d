//! Question answering port
//!
//! The single entry point exposed to boundary layers (CLI, REPL, HTTP).
//! Both the dispatcher and the caching decorator implement it, so callers
//! are unaffected by whether caching is enabled.

use answerbot_domain::{Answer, DomainError};
use serde::Serialize;
use std::sync::Arc;

/// Answer cache counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

/// Answers a raw question.
///
/// The only error is [`DomainError::EmptyQuestion`] for blank input.
/// Unparseable arithmetic, division by zero and unknown questions all
/// resolve to an (apologetic) [`Answer`].
pub trait QuestionAnswerer: Send + Sync {
    fn answer_question(&self, question: &str) -> Result<Answer, DomainError>;

    /// Cache counters, if this answerer memoizes
    fn cache_stats(&self) -> Option<CacheStats> {
        None
    }
}

impl<T: QuestionAnswerer + ?Sized> QuestionAnswerer for Arc<T> {
    fn answer_question(&self, question: &str) -> Result<Answer, DomainError> {
        (**self).answer_question(question)
    }

    fn cache_stats(&self) -> Option<CacheStats> {
        (**self).cache_stats()
    }
}

impl<T: QuestionAnswerer + ?Sized> QuestionAnswerer for Box<T> {
    fn answer_question(&self, question: &str) -> Result<Answer, DomainError> {
        (**self).answer_question(question)
    }

    fn cache_stats(&self) -> Option<CacheStats> {
        (**self).cache_stats()
    }
}
