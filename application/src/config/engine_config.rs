//! Engine configuration - how the answering pipeline is assembled.
//!
//! [`EngineConfig`] groups the parameters that decide whether answers are
//! cached and which question lengths the boundary layers accept. These are
//! application-layer concerns, not domain policy.

use answerbot_domain::QuestionBounds;
use serde::{Deserialize, Serialize};

/// Answer pipeline parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Memoize answers per raw question text.
    pub cache_enabled: bool,
    /// Stop admitting new answers once this many are cached (`None` = unbounded).
    pub cache_max_entries: Option<usize>,
    /// Question length accepted by the CLI, REPL and HTTP layers.
    pub bounds: QuestionBounds,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cache_enabled: true,
            cache_max_entries: None,
            bounds: QuestionBounds::default(),
        }
    }
}

impl EngineConfig {
    // ==================== Builder Methods ====================

    pub fn with_cache(mut self, enabled: bool) -> Self {
        self.cache_enabled = enabled;
        self
    }

    pub fn with_cache_max_entries(mut self, max: Option<usize>) -> Self {
        self.cache_max_entries = max;
        self
    }

    pub fn with_bounds(mut self, bounds: QuestionBounds) -> Self {
        self.bounds = bounds;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = EngineConfig::default();
        assert!(config.cache_enabled);
        assert_eq!(config.cache_max_entries, None);
        assert_eq!(config.bounds, QuestionBounds::new(3, 500));
    }

    #[test]
    fn test_builder() {
        let config = EngineConfig::default()
            .with_cache(false)
            .with_cache_max_entries(Some(10))
            .with_bounds(QuestionBounds::new(1, 20));
        assert!(!config.cache_enabled);
        assert_eq!(config.cache_max_entries, Some(10));
        assert_eq!(config.bounds.max_len, 20);
    }
}
