//! Use cases (application services)
//!
//! - [`answer_question`]: dispatch a question through the strategy chain
//! - [`cached_answer`]: memoizing decorator around any answerer

pub mod answer_question;
pub mod cached_answer;

use crate::config::EngineConfig;
use crate::ports::answer_logger::AnswerLogger;
use crate::ports::question_answerer::QuestionAnswerer;
use answer_question::AnswerQuestionUseCase;
use answerbot_domain::StrategyChain;
use cached_answer::CachedAnswerer;
use std::sync::Arc;
use tracing::info;

/// Wire the dispatcher and, if enabled, the answer cache around it.
pub fn assemble_answerer(
    chain: StrategyChain,
    config: &EngineConfig,
    logger: Arc<dyn AnswerLogger>,
) -> Arc<dyn QuestionAnswerer> {
    let dispatcher = AnswerQuestionUseCase::new(chain).with_logger(logger);

    if !config.cache_enabled {
        info!("Answer cache disabled");
        return Arc::new(dispatcher);
    }

    match config.cache_max_entries {
        Some(max) => info!("Answer cache enabled (max {} entries)", max),
        None => info!("Answer cache enabled (unbounded)"),
    }
    Arc::new(CachedAnswerer::new(dispatcher).with_max_entries(config.cache_max_entries))
}
