//! Arithmetic expression evaluator
//!
//! Two-stack operator-precedence evaluation over `+ - * /` and parentheses.
//! Operators of equal precedence associate to the left.

use super::error::ExpressionError;
use super::operator::Operator;
use super::validation::is_valid_expression;

/// Validates and computes arithmetic expressions.
///
/// Implementations are stateless and shared between strategies behind an
/// `Arc`.
pub trait ExpressionEvaluator: Send + Sync {
    /// Pure grammar check; blank input is never valid
    fn is_valid(&self, expression: &str) -> bool;

    /// Evaluate a valid expression.
    ///
    /// Returns [`ExpressionError::InvalidExpression`] without attempting
    /// evaluation when `is_valid` is false.
    fn evaluate(&self, expression: &str) -> Result<f64, ExpressionError>;
}

/// Default evaluator for decimal arithmetic
#[derive(Debug, Default, Clone, Copy)]
pub struct ArithmeticEvaluator;

impl ArithmeticEvaluator {
    pub fn new() -> Self {
        Self
    }
}

impl ExpressionEvaluator for ArithmeticEvaluator {
    fn is_valid(&self, expression: &str) -> bool {
        is_valid_expression(expression)
    }

    fn evaluate(&self, expression: &str) -> Result<f64, ExpressionError> {
        if !self.is_valid(expression) {
            return Err(ExpressionError::invalid(expression));
        }

        let compact: String = expression
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();

        evaluate_compact(&compact)
    }
}

/// Entry on the operator stack
#[derive(Debug, Clone, Copy)]
enum Pending {
    Open,
    Op(Operator),
}

/// Evaluate a whitespace-free expression that already passed validation.
fn evaluate_compact(expression: &str) -> Result<f64, ExpressionError> {
    let mut values: Vec<f64> = Vec::new();
    let mut pending: Vec<Pending> = Vec::new();
    let mut chars = expression.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        if c.is_ascii_digit() || c == '.' {
            let mut end = start + c.len_utf8();
            while let Some(&(i, next)) = chars.peek() {
                if !(next.is_ascii_digit() || next == '.') {
                    break;
                }
                end = i + next.len_utf8();
                chars.next();
            }
            let literal = &expression[start..end];
            let value = literal
                .parse::<f64>()
                .map_err(|_| ExpressionError::invalid(format!("malformed number '{literal}'")))?;
            if !value.is_finite() {
                return Err(ExpressionError::invalid(format!("number out of range '{literal}'")));
            }
            values.push(value);
            continue;
        }

        match c {
            '(' => pending.push(Pending::Open),
            ')' => loop {
                match pending.pop() {
                    Some(Pending::Open) => break,
                    Some(Pending::Op(op)) => apply(op, &mut values)?,
                    None => return Err(ExpressionError::invalid("unbalanced ')'")),
                }
            },
            _ => {
                let op = Operator::from_char(c)
                    .ok_or_else(|| ExpressionError::invalid(format!("unexpected '{c}'")))?;
                while let Some(&Pending::Op(top)) = pending.last() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    pending.pop();
                    apply(top, &mut values)?;
                }
                pending.push(Pending::Op(op));
            }
        }
    }

    while let Some(entry) = pending.pop() {
        match entry {
            Pending::Op(op) => apply(op, &mut values)?,
            Pending::Open => return Err(ExpressionError::invalid("unbalanced '('")),
        }
    }

    match values.as_slice() {
        [result] => Ok(*result),
        [] => Err(ExpressionError::invalid("no value produced")),
        _ => Err(ExpressionError::invalid(format!(
            "{} operands left without operators",
            values.len()
        ))),
    }
}

/// Pop the right then the left operand, push `left op right`.
///
/// Results that overflow `f64` are rejected.
fn apply(op: Operator, values: &mut Vec<f64>) -> Result<(), ExpressionError> {
    let (Some(right), Some(left)) = (values.pop(), values.pop()) else {
        return Err(ExpressionError::invalid(format!(
            "missing operand for '{op}'"
        )));
    };
    let result = op.apply(left, right)?;
    if !result.is_finite() {
        return Err(ExpressionError::invalid(format!(
            "result of '{op}' is out of range"
        )));
    }
    values.push(result);
    Ok(())
}
