//! Catch-all strategy with stable canned answers

use crate::core::answer::Answer;
use crate::core::question::Question;
use crate::core::string::stable_hash;
use crate::strategy::traits::{AnswerStrategy, StrategyPriority};

/// Canned apologies, selected by question hash
pub const CANNED_ANSWERS: [&str; 5] = [
    "I am not sure how to answer that.",
    "Sorry! I don't think I am able to answer that.",
    "Sorry! I don't have that information.",
    "I am afraid, I am not programmed for that question.",
    "Sorry! This question is beyond my current scope.",
];

/// Always answers, picking `CANNED_ANSWERS[|hash(question)| % N]`.
///
/// The hash is taken over the raw question text, so the same text always
/// gets the same apology.
#[derive(Debug, Default, Clone, Copy)]
pub struct FallbackStrategy;

impl FallbackStrategy {
    pub const NAME: &'static str = "fallback";

    pub fn new() -> Self {
        Self
    }

    /// Index into [`CANNED_ANSWERS`] for `text`
    pub fn select_index(text: &str) -> usize {
        stable_hash(text).unsigned_abs() as usize % CANNED_ANSWERS.len()
    }
}

impl AnswerStrategy for FallbackStrategy {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn priority(&self) -> StrategyPriority {
        StrategyPriority::FALLBACK
    }

    fn can_answer(&self, _question: &Question) -> bool {
        true
    }

    fn answer(&self, question: &Question) -> Answer {
        Answer::new(CANNED_ANSWERS[Self::select_index(question.content())])
    }

    fn is_fallback(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn q(s: &str) -> Question {
        Question::new(s).unwrap()
    }

    #[test]
    fn test_always_answerable() {
        assert!(FallbackStrategy.can_answer(&q("Random Question")));
        assert!(FallbackStrategy.is_fallback());
    }

    #[test]
    fn test_same_question_same_answer() {
        let first = FallbackStrategy.answer(&q("What can you do?"));
        let second = FallbackStrategy.answer(&q("What can you do?"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_different_questions_scatter() {
        assert_ne!(
            FallbackStrategy.answer(&q("How are you?")),
            FallbackStrategy.answer(&q("Who created you?"))
        );

        let answers: HashSet<_> = [
            "hi",
            "How are you?",
            "Who created you?",
            "Tell me a joke",
            "Where do you live?",
            "What is 5 / 0 ?",
        ]
        .iter()
        .map(|s| FallbackStrategy.answer(&q(s)))
        .collect();
        assert!(answers.len() >= 4, "got {answers:?}");
    }

    #[test]
    fn test_known_selection() {
        // |hash("hi")| = 3329
        assert_eq!(FallbackStrategy::select_index("hi"), 3329 % 5);
        assert_eq!(
            FallbackStrategy.answer(&q("hi")),
            "Sorry! This question is beyond my current scope."
        );
    }

    #[test]
    fn test_negative_hash_stays_in_range() {
        // "Random Question" hashes to a negative value
        assert!(crate::core::string::stable_hash("Random Question") < 0);
        assert!(FallbackStrategy::select_index("Random Question") < CANNED_ANSWERS.len());
    }
}
