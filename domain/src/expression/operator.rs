//! Binary arithmetic operators

use super::error::ExpressionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// `*` and `/` bind tighter than `+` and `-`
    pub fn precedence(&self) -> u8 {
        match self {
            Operator::Add | Operator::Subtract => 1,
            Operator::Multiply | Operator::Divide => 2,
        }
    }

    pub fn apply(&self, left: f64, right: f64) -> Result<f64, ExpressionError> {
        match self {
            Operator::Add => Ok(left + right),
            Operator::Subtract => Ok(left - right),
            Operator::Multiply => Ok(left * right),
            Operator::Divide if right == 0.0 => Err(ExpressionError::DivisionByZero),
            Operator::Divide => Ok(left / right),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_char_roundtrip() {
        for c in ['+', '-', '*', '/'] {
            assert_eq!(Operator::from_char(c).unwrap().as_char(), c);
        }
        assert!(Operator::from_char('^').is_none());
        assert!(Operator::from_char('(').is_none());
    }

    #[test]
    fn test_precedence() {
        assert!(Operator::Multiply.precedence() > Operator::Add.precedence());
        assert_eq!(Operator::Divide.precedence(), Operator::Multiply.precedence());
        assert_eq!(Operator::Subtract.precedence(), Operator::Add.precedence());
    }

    #[test]
    fn test_apply_argument_order() {
        assert_eq!(Operator::Subtract.apply(9.0, 5.0), Ok(4.0));
        assert_eq!(Operator::Divide.apply(4.0, 2.0), Ok(2.0));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(
            Operator::Divide.apply(7.0, 0.0),
            Err(ExpressionError::DivisionByZero)
        );
        assert_eq!(
            Operator::Divide.apply(7.0, -0.0),
            Err(ExpressionError::DivisionByZero)
        );
    }
}
