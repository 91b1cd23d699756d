//! Arithmetic question strategy

use crate::core::answer::Answer;
use crate::core::question::Question;
use crate::expression::{ExpressionError, ExpressionEvaluator, format_number};
use crate::strategy::extraction::extract_expression;
use crate::strategy::traits::{AnswerStrategy, StrategyPriority};
use std::sync::Arc;

/// Answers questions such as "What is 3+4?" or "Calculate (5*3)".
///
/// Evaluation failures become apologies rather than errors: division by zero
/// reports the arithmetic problem, any other failure asks the user to check
/// the expression.
pub struct ArithmeticStrategy {
    evaluator: Arc<dyn ExpressionEvaluator>,
}

impl ArithmeticStrategy {
    pub const NAME: &'static str = "arithmetic";

    pub const ANSWER_PREFIX: &'static str = " Answer is : ";
    pub const CANNOT_PARSE: &'static str = "Sorry! I am not able to parse the given expression.";
    pub const INVALID_ARITHMETIC: &'static str = "Sorry! Invalid Arithmetic Expression: ";
    pub const CANNOT_CALCULATE: &'static str =
        "Sorry! I am not able to calculate that. Please check expression.";

    pub fn new(evaluator: Arc<dyn ExpressionEvaluator>) -> Self {
        Self { evaluator }
    }
}

impl AnswerStrategy for ArithmeticStrategy {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn priority(&self) -> StrategyPriority {
        StrategyPriority::ARITHMETIC
    }

    fn can_answer(&self, question: &Question) -> bool {
        extract_expression(question.content())
            .is_some_and(|expression| self.evaluator.is_valid(&expression))
    }

    fn answer(&self, question: &Question) -> Answer {
        let Some(expression) = extract_expression(question.content()) else {
            return Answer::new(Self::CANNOT_PARSE);
        };

        match self.evaluator.evaluate(&expression) {
            Ok(value) => Answer::new(format!("{}{}", Self::ANSWER_PREFIX, format_number(value))),
            Err(err @ ExpressionError::DivisionByZero) => {
                Answer::new(format!("{}{}", Self::INVALID_ARITHMETIC, err))
            }
            Err(ExpressionError::InvalidExpression(_)) => Answer::new(Self::CANNOT_CALCULATE),
        }
    }
}
