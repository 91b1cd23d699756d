//! Answer cache configuration from TOML (`[cache]` section)

use serde::{Deserialize, Serialize};

/// Raw cache configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCacheConfig {
    /// Memoize answers per raw question
    pub enabled: bool,
    /// Stop storing new answers after this many (none = unbounded)
    pub max_entries: Option<usize>,
}

impl Default for FileCacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_entries: None,
        }
    }
}
