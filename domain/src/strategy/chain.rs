//! Strategy chain
//!
//! An immutable, priority-ordered list of [`AnswerStrategy`] values.
//! Strategies are sorted by ascending [`StrategyPriority`] when the chain is
//! built; strategies sharing a rank keep their registration order.
//!
//! ```ignore
//! let chain = StrategyChain::builder()
//!     .register(FallbackStrategy::new())
//!     .register(PredefinedStrategy::new(repository))
//!     .register(ArithmeticStrategy::new(evaluator))
//!     .build()?;
//!
//! assert_eq!(chain.names(), vec!["predefined", "arithmetic", "fallback"]);
//! ```

use crate::core::error::DomainError;
use crate::core::question::Question;
use crate::expression::ExpressionEvaluator;
use crate::repository::QuestionRepository;
use crate::strategy::arithmetic::ArithmeticStrategy;
use crate::strategy::fallback::FallbackStrategy;
use crate::strategy::predefined::PredefinedStrategy;
use crate::strategy::traits::AnswerStrategy;
use std::sync::Arc;

/// Ordered chain of answer strategies
#[derive(Clone, Default)]
pub struct StrategyChain {
    strategies: Vec<Arc<dyn AnswerStrategy>>,
}

impl StrategyChain {
    pub fn builder() -> StrategyChainBuilder {
        StrategyChainBuilder::default()
    }

    /// Predefined lookup, then arithmetic, then fallback
    pub fn standard(
        evaluator: Arc<dyn ExpressionEvaluator>,
        repository: Arc<dyn QuestionRepository>,
    ) -> Self {
        Self {
            strategies: vec![
                Arc::new(PredefinedStrategy::new(repository)),
                Arc::new(ArithmeticStrategy::new(evaluator)),
                Arc::new(FallbackStrategy::new()),
            ],
        }
    }

    /// First strategy, in priority order, willing to answer `question`
    pub fn select(&self, question: &Question) -> Option<&dyn AnswerStrategy> {
        self.strategies
            .iter()
            .map(|s| s.as_ref())
            .find(|s| s.can_answer(question))
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// True when a catch-all strategy guarantees every question is answered
    pub fn has_fallback(&self) -> bool {
        self.strategies.iter().any(|s| s.is_fallback())
    }
}

impl std::fmt::Debug for StrategyChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.strategies.iter().map(|s| (s.name(), s.priority().rank())))
            .finish()
    }
}

/// Collects strategies and produces a sorted [`StrategyChain`]
#[derive(Default)]
pub struct StrategyChainBuilder {
    strategies: Vec<Arc<dyn AnswerStrategy>>,
}

impl StrategyChainBuilder {
    pub fn register<S: AnswerStrategy + 'static>(mut self, strategy: S) -> Self {
        self.strategies.push(Arc::new(strategy));
        self
    }

    pub fn register_arc(mut self, strategy: Arc<dyn AnswerStrategy>) -> Self {
        self.strategies.push(strategy);
        self
    }

    /// Sort by priority and check that at most one fallback is present.
    pub fn build(mut self) -> Result<StrategyChain, DomainError> {
        let fallbacks = self.strategies.iter().filter(|s| s.is_fallback()).count();
        if fallbacks > 1 {
            return Err(DomainError::InvalidChain(format!(
                "{fallbacks} fallback strategies registered, at most one is allowed"
            )));
        }

        self.strategies.sort_by_key(|s| s.priority());
        Ok(StrategyChain {
            strategies: self.strategies,
        })
    }
}
