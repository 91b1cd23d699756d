//! Predefined question configuration from TOML (`[questions]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Question file shipped with the project, relative to the working directory
const DEFAULT_QUESTIONS_PATH: &str = "data/questions.json";

/// Raw question source configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQuestionsConfig {
    /// JSON file of question/answer pairs (none = no predefined answers)
    pub path: Option<PathBuf>,
}

impl Default for FileQuestionsConfig {
    fn default() -> Self {
        Self {
            path: Some(PathBuf::from(DEFAULT_QUESTIONS_PATH)),
        }
    }
}
