//! Answer strategy trait

use crate::core::answer::Answer;
use crate::core::question::Question;

/// Position of a strategy in the chain; lower ranks are consulted first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StrategyPriority(pub u32);

impl StrategyPriority {
    pub const PREDEFINED: Self = Self(1);
    pub const ARITHMETIC: Self = Self(2);
    /// Reserved for the catch-all strategy
    pub const FALLBACK: Self = Self(u32::MAX);

    pub fn rank(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for StrategyPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A self-contained answering policy.
///
/// Strategies hold no per-question state. Shared dependencies (evaluator,
/// repository) are read-only and held behind `Arc`.
pub trait AnswerStrategy: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    fn priority(&self) -> StrategyPriority;

    /// Whether this strategy is willing to answer `question`
    fn can_answer(&self, question: &Question) -> bool;

    /// Produce the answer. Only called after `can_answer` returned true.
    fn answer(&self, question: &Question) -> Answer;

    /// Catch-all strategies answer every question. A chain holds at most one.
    fn is_fallback(&self) -> bool {
        false
    }
}
