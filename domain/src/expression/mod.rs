//! Arithmetic expressions
//!
//! - [`validation`]: pure grammar check for extracted expressions
//! - [`evaluator`]: [`ExpressionEvaluator`] port and the operator-precedence
//!   [`ArithmeticEvaluator`]
//! - [`format`]: display formatting of results

pub mod error;
pub mod evaluator;
pub mod format;
pub mod operator;
pub mod validation;

pub use error::ExpressionError;
pub use evaluator::{ArithmeticEvaluator, ExpressionEvaluator};
pub use format::format_number;
pub use operator::Operator;
pub use validation::is_valid_expression;
