//! Expression grammar check
//!
//! An expression may contain only ASCII digits, `.`, the operators
//! `+ - * /`, parentheses and whitespace. On top of the character set, three
//! malformed shapes are rejected:
//!
//! - two operators with nothing but whitespace between them (`5 + + 6`)
//! - an empty parenthesis pair (`()`, `( )`)
//! - two numbers separated only by whitespace (`5  7`)
//!
//! Every number must have at least one digit and at most one decimal point.
//! Shapes such as a trailing operator or unbalanced parentheses pass this
//! check and are caught by the evaluator instead.

use super::operator::Operator;

/// Last significant token seen while scanning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Seen {
    Nothing,
    Number,
    Operator,
    Open,
    Close,
}

/// Numeric run being scanned
#[derive(Debug, Default)]
struct NumberRun {
    digits: usize,
    dots: usize,
}

impl NumberRun {
    fn is_well_formed(&self) -> bool {
        self.digits > 0 && self.dots <= 1
    }
}

/// Returns true if `expression` satisfies the arithmetic grammar.
///
/// Blank input is never valid. Whitespace means Unicode whitespace
/// ([`char::is_whitespace`]), the same set the evaluator strips.
pub fn is_valid_expression(expression: &str) -> bool {
    let trimmed = expression.trim();
    if trimmed.is_empty() {
        return false;
    }

    let mut seen = Seen::Nothing;
    let mut run: Option<NumberRun> = None;

    for c in trimmed.chars() {
        if c.is_ascii_digit() || c == '.' {
            if run.is_none() && seen == Seen::Number {
                return false;
            }
            let current = run.get_or_insert_with(NumberRun::default);
            if c == '.' {
                current.dots += 1;
            } else {
                current.digits += 1;
            }
            seen = Seen::Number;
            continue;
        }

        if let Some(finished) = run.take()
            && !finished.is_well_formed()
        {
            return false;
        }

        if c.is_whitespace() {
            continue;
        }

        seen = match c {
            '(' => Seen::Open,
            ')' if seen == Seen::Open => return false,
            ')' => Seen::Close,
            _ if Operator::from_char(c).is_some() => {
                if seen == Seen::Operator {
                    return false;
                }
                Seen::Operator
            }
            _ => return false,
        };
    }

    run.is_none_or(|finished| finished.is_well_formed())
}
