//! Answer Question use case
//!
//! Dispatches a question through the strategy chain (chain of
//! responsibility): the first strategy willing to answer produces the answer
//! and no further strategies are consulted.

use crate::ports::answer_logger::{AnswerEvent, AnswerLogger, NoAnswerLogger};
use crate::ports::question_answerer::QuestionAnswerer;
use answerbot_domain::core::string::truncate;
use answerbot_domain::{Answer, DomainError, Question, StrategyChain};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Use case for answering a single question
pub struct AnswerQuestionUseCase {
    chain: Arc<StrategyChain>,
    logger: Arc<dyn AnswerLogger>,
}

impl AnswerQuestionUseCase {
    /// Returned when no registered strategy can answer
    pub const UNABLE_TO_ANSWER: &'static str = "Sorry! I am unable to answer that question";

    pub fn new(chain: StrategyChain) -> Self {
        Self::with_shared_chain(Arc::new(chain))
    }

    pub fn with_shared_chain(chain: Arc<StrategyChain>) -> Self {
        info!(
            "Initialized with {} strategies: {}",
            chain.len(),
            chain.names().join(", ")
        );
        if !chain.has_fallback() {
            warn!("Strategy chain has no fallback; some questions will go unanswered");
        }
        Self {
            chain,
            logger: Arc::new(NoAnswerLogger),
        }
    }

    /// Record every answer through `logger`
    pub fn with_logger(mut self, logger: Arc<dyn AnswerLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Execute the use case.
    ///
    /// Blank input fails with [`DomainError::EmptyQuestion`] before any
    /// strategy is consulted. Everything else yields an answer.
    pub fn execute(&self, raw: &str) -> Result<Answer, DomainError> {
        let question = Question::new(raw)?;

        match self.chain.select(&question) {
            Some(strategy) => {
                debug!(
                    strategy = strategy.name(),
                    question = %truncate(raw, 80),
                    "Using strategy"
                );
                let answer = strategy.answer(&question);
                self.logger
                    .log(AnswerEvent::answered(raw, answer.as_str(), strategy.name()));
                Ok(answer)
            }
            None => {
                warn!("No strategy match for question: {}", truncate(raw, 80));
                self.logger.log(AnswerEvent::unanswered(raw));
                Ok(Answer::new(Self::UNABLE_TO_ANSWER))
            }
        }
    }
}

impl QuestionAnswerer for AnswerQuestionUseCase {
    fn answer_question(&self, question: &str) -> Result<Answer, DomainError> {
        self.execute(question)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use answerbot_domain::{
        AnswerStrategy, ArithmeticEvaluator, CANNED_ANSWERS, QuestionRepository, StrategyPriority,
    };
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct MapRepository(HashMap<String, String>);

    impl MapRepository {
        fn new(pairs: &[(&str, &str)]) -> Self {
            Self(
                pairs
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            )
        }
    }

    impl QuestionRepository for MapRepository {
        fn find_answer(&self, key: &str) -> Option<String> {
            self.0.get(key).cloned()
        }
        fn all_entries(&self) -> &HashMap<String, String> {
            &self.0
        }
    }

    /// Strategy that counts how often each method is called
    struct Counting {
        name: &'static str,
        rank: u32,
        answers: bool,
        checks: AtomicUsize,
        produced: AtomicUsize,
    }

    impl Counting {
        fn new(name: &'static str, rank: u32, answers: bool) -> Arc<Self> {
            Arc::new(Self {
                name,
                rank,
                answers,
                checks: AtomicUsize::new(0),
                produced: AtomicUsize::new(0),
            })
        }
    }

    impl AnswerStrategy for Counting {
        fn name(&self) -> &'static str {
            self.name
        }
        fn priority(&self) -> StrategyPriority {
            StrategyPriority(self.rank)
        }
        fn can_answer(&self, _question: &Question) -> bool {
            self.checks.fetch_add(1, Ordering::SeqCst);
            self.answers
        }
        fn answer(&self, _question: &Question) -> Answer {
            self.produced.fetch_add(1, Ordering::SeqCst);
            Answer::new(self.name)
        }
    }

    #[derive(Default)]
    struct RecordingLogger(Mutex<Vec<AnswerEvent>>);

    impl AnswerLogger for RecordingLogger {
        fn log(&self, event: AnswerEvent) {
            self.0.lock().unwrap().push(event);
        }
    }

    fn standard(pairs: &[(&str, &str)]) -> AnswerQuestionUseCase {
        AnswerQuestionUseCase::new(StrategyChain::standard(
            Arc::new(ArithmeticEvaluator::new()),
            Arc::new(MapRepository::new(pairs)),
        ))
    }

    #[test]
    fn test_empty_question_rejected_before_strategies() {
        let strategy = Counting::new("any", 1, true);
        let chain = StrategyChain::builder()
            .register_arc(strategy.clone())
            .build()
            .unwrap();
        let use_case = AnswerQuestionUseCase::new(chain);

        assert_eq!(use_case.execute(""), Err(DomainError::EmptyQuestion));
        assert_eq!(use_case.execute("   "), Err(DomainError::EmptyQuestion));
        assert_eq!(strategy.checks.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_first_willing_strategy_short_circuits() {
        let declines = Counting::new("declines", 1, false);
        let accepts = Counting::new("accepts", 2, true);
        let never = Counting::new("never", 3, true);
        let chain = StrategyChain::builder()
            .register_arc(never.clone())
            .register_arc(accepts.clone())
            .register_arc(declines.clone())
            .build()
            .unwrap();
        let use_case = AnswerQuestionUseCase::new(chain);

        assert_eq!(use_case.execute("question").unwrap(), "accepts");
        assert_eq!(declines.checks.load(Ordering::SeqCst), 1);
        assert_eq!(declines.produced.load(Ordering::SeqCst), 0);
        assert_eq!(accepts.produced.load(Ordering::SeqCst), 1);
        assert_eq!(never.checks.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_empty_chain_returns_sentinel() {
        let use_case = AnswerQuestionUseCase::new(StrategyChain::builder().build().unwrap());
        assert_eq!(
            use_case.execute("anything at all").unwrap(),
            AnswerQuestionUseCase::UNABLE_TO_ANSWER
        );
    }

    #[test]
    fn test_end_to_end_arithmetic() {
        let use_case = standard(&[]);
        assert_eq!(
            use_case.execute("What is 50 + 20?").unwrap(),
            " Answer is : 70"
        );
        assert_eq!(
            use_case
                .execute("Calculate (14 + 2) * (40 / 3) / 2")
                .unwrap(),
            " Answer is : 106.67"
        );
    }

    #[test]
    fn test_end_to_end_fallback() {
        let use_case = standard(&[]);
        let answer = use_case.execute("hi").unwrap();
        assert!(CANNED_ANSWERS.contains(&answer.as_str()));
    }

    #[test]
    fn test_predefined_takes_priority_over_arithmetic() {
        let use_case = standard(&[("what is 2+2", "Four, obviously.")]);
        assert_eq!(use_case.execute("What is 2+2?").unwrap(), "Four, obviously.");
        assert_eq!(use_case.execute("What is 2+3?").unwrap(), " Answer is : 5");
    }

    #[test]
    fn test_answers_are_logged() {
        let logger = Arc::new(RecordingLogger::default());
        let use_case = standard(&[]).with_logger(logger.clone());

        use_case.execute("What is 1+1?").unwrap();

        let events = logger.0.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(
            events[0],
            AnswerEvent::answered("What is 1+1?", " Answer is : 2", "arithmetic")
        );
    }

    #[test]
    fn test_unanswered_is_logged() {
        let logger = Arc::new(RecordingLogger::default());
        let use_case = AnswerQuestionUseCase::new(StrategyChain::default())
            .with_logger(logger.clone());

        use_case.execute("hello").unwrap();

        let events = logger.0.lock().unwrap();
        assert_eq!(events[0], AnswerEvent::unanswered("hello"));
    }
}
