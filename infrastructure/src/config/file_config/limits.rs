//! Question length limits from TOML (`[limits]` section)

use answerbot_domain::QuestionBounds;
use serde::{Deserialize, Serialize};

/// Raw question length limits from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLimitsConfig {
    pub min_question_len: usize,
    pub max_question_len: usize,
}

impl Default for FileLimitsConfig {
    fn default() -> Self {
        Self {
            min_question_len: QuestionBounds::DEFAULT_MIN_LEN,
            max_question_len: QuestionBounds::DEFAULT_MAX_LEN,
        }
    }
}
