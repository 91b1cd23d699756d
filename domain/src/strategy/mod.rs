//! Answer strategies and the chain that orders them.
//!
//! Strategies are consulted in ascending priority; the first one willing to
//! answer produces the answer:
//!
//! | Rank | Strategy | Answers when |
//! |------|----------|--------------|
//! | 1 | [`PredefinedStrategy`] | normalized question is in the repository |
//! | 2 | [`ArithmeticStrategy`] | question is `<verb> <expression>` |
//! | max | [`FallbackStrategy`] | always |

pub mod arithmetic;
pub mod chain;
pub mod extraction;
pub mod fallback;
pub mod predefined;
pub mod traits;

#[cfg(test)]
pub(crate) mod testing;

pub use arithmetic::ArithmeticStrategy;
pub use chain::{StrategyChain, StrategyChainBuilder};
pub use extraction::extract_expression;
pub use fallback::{CANNED_ANSWERS, FallbackStrategy};
pub use predefined::PredefinedStrategy;
pub use traits::{AnswerStrategy, StrategyPriority};
