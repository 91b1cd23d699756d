//! Predefined question repository trait

use std::collections::HashMap;

/// Read-only lookup of canned answers by normalized question.
///
/// Keys are stored lowercase and trimmed by the loader. Implementations live
/// in the infrastructure layer and are populated once at startup.
pub trait QuestionRepository: Send + Sync {
    /// Look up the answer for an already-normalized question
    fn find_answer(&self, normalized_key: &str) -> Option<String>;

    /// All question/answer pairs
    fn all_entries(&self) -> &HashMap<String, String>;

    fn len(&self) -> usize {
        self.all_entries().len()
    }

    fn is_empty(&self) -> bool {
        self.all_entries().is_empty()
    }
}
