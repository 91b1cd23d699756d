//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to application types with
//! [`FileConfig::to_engine_config`].

mod cache;
mod limits;
mod logging;
mod questions;
mod server;

pub use cache::FileCacheConfig;
pub use limits::FileLimitsConfig;
pub use logging::FileLoggingConfig;
pub use questions::FileQuestionsConfig;
pub use server::FileServerConfig;

use answerbot_application::EngineConfig;
use answerbot_domain::QuestionBounds;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    #[error("cache.max_entries cannot be 0 (omit it for an unbounded cache)")]
    ZeroCacheCapacity,

    #[error("limits.min_question_len ({min}) is greater than limits.max_question_len ({max})")]
    InvertedLimits { min: usize, max: usize },

    #[error("server.port cannot be 0")]
    ZeroPort,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Predefined question source
    pub questions: FileQuestionsConfig,
    /// Answer cache settings
    pub cache: FileCacheConfig,
    /// Accepted question lengths
    pub limits: FileLimitsConfig,
    /// HTTP server settings
    pub server: FileServerConfig,
    /// Answer transcript settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning every detected problem.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if self.cache.max_entries == Some(0) {
            errors.push(ConfigValidationError::ZeroCacheCapacity);
        }
        if self.limits.min_question_len > self.limits.max_question_len {
            errors.push(ConfigValidationError::InvertedLimits {
                min: self.limits.min_question_len,
                max: self.limits.max_question_len,
            });
        }
        if self.server.port == 0 {
            errors.push(ConfigValidationError::ZeroPort);
        }

        errors
    }

    /// Convert to the application-layer engine parameters
    pub fn to_engine_config(&self) -> EngineConfig {
        EngineConfig::default()
            .with_cache(self.cache.enabled)
            .with_cache_max_entries(self.cache.max_entries)
            .with_bounds(QuestionBounds::new(
                self.limits.min_question_len,
                self.limits.max_question_len,
            ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[questions]
path = "data/questions.json"

[cache]
enabled = false
max_entries = 1000

[limits]
min_question_len = 5
max_question_len = 200

[server]
host = "0.0.0.0"
port = 9000
cors_origins = ["http://localhost:3000"]

[logging]
transcript = "answers.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.questions.path.as_deref(),
            Some(std::path::Path::new("data/questions.json"))
        );
        assert!(!config.cache.enabled);
        assert_eq!(config.cache.max_entries, Some(1000));
        assert_eq!(config.limits.min_question_len, 5);
        assert_eq!(config.limits.max_question_len, 200);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.cors_origins, vec!["http://localhost:3000"]);
        assert!(config.logging.transcript.is_some());
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[cache]
max_entries = 50
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.cache.max_entries, Some(50));
        // Defaults should apply
        assert!(config.cache.enabled);
        assert_eq!(config.questions, FileQuestionsConfig::default());
        assert_eq!(config.limits, FileLimitsConfig::default());
        assert_eq!(config.server, FileServerConfig::default());
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());

        let engine = config.to_engine_config();
        assert_eq!(engine, EngineConfig::default());
    }

    #[test]
    fn test_validate_reports_all_errors() {
        let mut config = FileConfig::default();
        config.cache.max_entries = Some(0);
        config.limits.min_question_len = 10;
        config.limits.max_question_len = 5;
        config.server.port = 0;

        let errors = config.validate();
        assert_eq!(
            errors,
            vec![
                ConfigValidationError::ZeroCacheCapacity,
                ConfigValidationError::InvertedLimits { min: 10, max: 5 },
                ConfigValidationError::ZeroPort,
            ]
        );
    }

    #[test]
    fn test_to_engine_config() {
        let toml_str = r#"
[cache]
enabled = false
max_entries = 3

[limits]
min_question_len = 1
max_question_len = 80
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let engine = config.to_engine_config();
        assert!(!engine.cache_enabled);
        assert_eq!(engine.cache_max_entries, Some(3));
        assert_eq!(engine.bounds, QuestionBounds::new(1, 80));
    }
}
