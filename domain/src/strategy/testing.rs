//! Test doubles shared by strategy tests

use crate::core::string::normalize_key;
use crate::repository::QuestionRepository;
use std::collections::HashMap;

/// In-memory repository keyed like the real loader (lowercase, trimmed)
pub(crate) struct MapRepository {
    entries: HashMap<String, String>,
}

impl MapRepository {
    pub(crate) fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            entries: pairs
                .iter()
                .map(|(k, v)| (normalize_key(k), v.to_string()))
                .collect(),
        }
    }

    pub(crate) fn empty() -> Self {
        Self::from_pairs(&[])
    }
}

impl QuestionRepository for MapRepository {
    fn find_answer(&self, normalized_key: &str) -> Option<String> {
        self.entries.get(&normalize_key(normalized_key)).cloned()
    }

    fn all_entries(&self) -> &HashMap<String, String> {
        &self.entries
    }
}
