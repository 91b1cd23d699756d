//! Memoizing answer decorator
//!
//! [`CachedAnswerer`] wraps any [`QuestionAnswerer`] and remembers answers
//! keyed by the exact raw question text (no normalization, so `"Hi"` and
//! `"hi "` are distinct entries). Entries live for the lifetime of the
//! process.
//!
//! # Concurrency
//!
//! Each question owns a slot guarded by its own mutex. Concurrent callers
//! asking the same new question queue on that slot, so the inner answerer
//! runs once and every caller observes the same answer. Different questions
//! never wait on each other beyond the brief map lock.
//!
//! Errors are never cached; the next call retries.

use crate::ports::question_answerer::{CacheStats, QuestionAnswerer};
use answerbot_domain::core::string::truncate;
use answerbot_domain::{Answer, DomainError};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use tracing::debug;

type Slot = Arc<Mutex<Option<Answer>>>;

/// Caching decorator exposing the same `answer_question` signature as the
/// answerer it wraps
pub struct CachedAnswerer<A: QuestionAnswerer> {
    inner: A,
    slots: RwLock<HashMap<String, Slot>>,
    max_entries: Option<usize>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<A: QuestionAnswerer> CachedAnswerer<A> {
    /// Unbounded cache
    pub fn new(inner: A) -> Self {
        Self {
            inner,
            slots: RwLock::new(HashMap::new()),
            max_entries: None,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Stop admitting new questions once `max` are cached.
    ///
    /// Existing entries are kept; questions beyond the limit are answered
    /// without being stored.
    pub fn with_max_entries(mut self, max: Option<usize>) -> Self {
        self.max_entries = max;
        self
    }

    pub fn inner(&self) -> &A {
        &self.inner
    }

    pub fn len(&self) -> usize {
        self.slots.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.len(),
        }
    }

    /// Existing slot for `question`, or a new one if there is room.
    fn slot_for(&self, question: &str) -> Option<Slot> {
        if let Some(slot) = self
            .slots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(question)
        {
            return Some(Arc::clone(slot));
        }

        let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(slot) = slots.get(question) {
            return Some(Arc::clone(slot));
        }
        if self.max_entries.is_some_and(|max| slots.len() >= max) {
            return None;
        }
        let slot: Slot = Arc::new(Mutex::new(None));
        slots.insert(question.to_string(), Arc::clone(&slot));
        Some(slot)
    }

    /// Drop a slot that never received an answer.
    fn discard(&self, question: &str, slot: &Slot) {
        let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);
        if slots.get(question).is_some_and(|current| Arc::ptr_eq(current, slot)) {
            slots.remove(question);
        }
    }

    fn compute(&self, question: &str) -> Result<Answer, DomainError> {
        self.misses.fetch_add(1, Ordering::Relaxed);
        debug!("Cache miss for question: {}", truncate(question, 80));
        self.inner.answer_question(question)
    }
}

impl<A: QuestionAnswerer> QuestionAnswerer for CachedAnswerer<A> {
    fn answer_question(&self, question: &str) -> Result<Answer, DomainError> {
        let Some(slot) = self.slot_for(question) else {
            debug!("Answer cache full, not storing");
            return self.compute(question);
        };

        let mut cached = slot.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(answer) = cached.as_ref() {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(answer.clone());
        }

        match self.compute(question) {
            Ok(answer) => {
                *cached = Some(answer.clone());
                Ok(answer)
            }
            Err(e) => {
                self.discard(question, &slot);
                Err(e)
            }
        }
    }

    fn cache_stats(&self) -> Option<CacheStats> {
        Some(self.stats())
    }
}
