//! Configuration file loading for answerbot
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `ANSWERBOT_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./answerbot.toml` or `./.answerbot.toml`
//! 4. Global: `$XDG_CONFIG_HOME/answerbot/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileCacheConfig, FileConfig, FileLimitsConfig, FileLoggingConfig,
    FileQuestionsConfig, FileServerConfig,
};
pub use loader::ConfigLoader;
