//! Expression evaluation errors

use thiserror::Error;

/// Why an arithmetic expression could not be evaluated
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpressionError {
    /// The expression failed validation, or the operator-precedence pass
    /// could not reduce it to exactly one value.
    #[error("Invalid arithmetic expression: {0}")]
    InvalidExpression(String),

    #[error("Division by zero is not allowed")]
    DivisionByZero,
}

impl ExpressionError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        ExpressionError::InvalidExpression(reason.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            ExpressionError::DivisionByZero.to_string(),
            "Division by zero is not allowed"
        );
        assert_eq!(
            ExpressionError::invalid("3+x").to_string(),
            "Invalid arithmetic expression: 3+x"
        );
    }
}
