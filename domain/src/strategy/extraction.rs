//! Arithmetic question recognition
//!
//! Matches questions shaped like `<verb> <expression>[?...]` where the verb is
//! one of `what is`, `calculate`, `compute`, `solve` or `evaluate`
//! (case-insensitive).

use crate::expression::is_valid_expression;
use regex::Regex;
use std::sync::LazyLock;

static ARITHMETIC_QUESTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:what is|calculate|compute|solve|evaluate)\s+(.+?)\s*\?*$")
        .expect("arithmetic question pattern is valid")
});

/// Extract the arithmetic expression from a question.
///
/// Returns `None` when the question does not have the arithmetic shape or
/// when the captured body is not a valid expression (e.g. "What is your
/// name?").
pub fn extract_expression(question: &str) -> Option<String> {
    let captures = ARITHMETIC_QUESTION.captures(question.trim())?;
    let body = captures.get(1)?.as_str().trim();
    is_valid_expression(body).then(|| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_with_question_mark() {
        assert_eq!(extract_expression("What is 1+4?"), Some("1+4".to_string()));
    }

    #[test]
    fn test_extract_each_verb() {
        assert_eq!(extract_expression("Calculate 6-3"), Some("6-3".to_string()));
        assert_eq!(extract_expression("compute (5*3)"), Some("(5*3)".to_string()));
        assert_eq!(extract_expression("SOLVE 10/2"), Some("10/2".to_string()));
        assert_eq!(
            extract_expression("Evaluate 8.6 + 2.3 ??"),
            Some("8.6 + 2.3".to_string())
        );
    }

    #[test]
    fn test_extract_trims_surrounding_whitespace() {
        assert_eq!(
            extract_expression("   what is   50 + 20  ?  "),
            Some("50 + 20".to_string())
        );
    }

    #[test]
    fn test_non_arithmetic_questions() {
        assert_eq!(extract_expression("Who are you?"), None);
        assert_eq!(extract_expression("Does 1+1 =2?"), None);
        assert_eq!(extract_expression("What is your name?"), None);
    }

    #[test]
    fn test_verb_requires_whitespace() {
        assert_eq!(extract_expression("Calculate"), None);
        assert_eq!(extract_expression("whatis 2+2"), None);
    }

    #[test]
    fn test_invalid_body_rejected() {
        assert_eq!(extract_expression("What is 5 + + 6?"), None);
        assert_eq!(extract_expression("Compute 5  7"), None);
    }
}
