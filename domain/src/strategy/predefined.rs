//! Predefined question lookup strategy

use crate::core::answer::Answer;
use crate::core::question::Question;
use crate::core::string::normalize_question;
use crate::repository::QuestionRepository;
use crate::strategy::traits::{AnswerStrategy, StrategyPriority};
use std::sync::Arc;

/// Answers questions found in the predefined question repository.
///
/// The question is normalized (trimmed, lowercased, trailing `?` removed)
/// before lookup; the stored answer is returned verbatim.
pub struct PredefinedStrategy {
    repository: Arc<dyn QuestionRepository>,
}

impl PredefinedStrategy {
    pub const NAME: &'static str = "predefined";

    /// Returned only if `answer` is called for an unknown question
    pub const NO_ANSWER: &'static str = "I do not have answer";

    pub fn new(repository: Arc<dyn QuestionRepository>) -> Self {
        Self { repository }
    }

    fn lookup(&self, question: &Question) -> Option<String> {
        self.repository
            .find_answer(&normalize_question(question.content()))
    }
}

impl AnswerStrategy for PredefinedStrategy {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn priority(&self) -> StrategyPriority {
        StrategyPriority::PREDEFINED
    }

    fn can_answer(&self, question: &Question) -> bool {
        self.lookup(question).is_some()
    }

    fn answer(&self, question: &Question) -> Answer {
        self.lookup(question)
            .map(Answer::from)
            .unwrap_or_else(|| Answer::new(Self::NO_ANSWER))
    }
}
