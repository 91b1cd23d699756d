//! JSON-file-backed question repository.
//!
//! The file is a single JSON object mapping question text to answer text:
//!
//! ```json
//! {
//!   "Who are you?": "I am answerbot.",
//!   "What can you do": "I can answer simple arithmetic questions."
//! }
//! ```
//!
//! Keys are normalized the same way incoming questions are (trimmed,
//! lowercased, trailing `?` dropped), so a key may be written with or
//! without its question mark. The file is read once; the repository is
//! read-only afterwards.

use answerbot_domain::{QuestionRepository, normalize_question};
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{error, info};

/// Errors while loading predefined questions
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Failed to read questions from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse questions from {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid questions JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl RepositoryError {
    /// The questions file does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::Io { source, .. } if source.kind() == ErrorKind::NotFound)
    }
}

/// Predefined questions loaded from a JSON file
#[derive(Debug, Clone, Default)]
pub struct JsonQuestionRepository {
    entries: HashMap<String, String>,
    source: Option<PathBuf>,
}

impl JsonQuestionRepository {
    /// Repository with no predefined questions
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from question/answer pairs, normalizing the keys.
    ///
    /// When two questions normalize to the same key the later one wins.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (normalize_question(k.as_ref()), v.into()))
                .collect(),
            source: None,
        }
    }

    /// Parse a JSON object of question/answer pairs
    pub fn from_json_str(json: &str) -> Result<Self, RepositoryError> {
        let raw: HashMap<String, String> = serde_json::from_str(json)?;
        Ok(Self::from_entries(raw))
    }

    /// Load from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RepositoryError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| RepositoryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let raw: HashMap<String, String> =
            serde_json::from_str(&content).map_err(|source| RepositoryError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let mut repository = Self::from_entries(raw);
        repository.source = Some(path.to_path_buf());
        info!(
            "Loaded {} question-answer pairs from {}",
            repository.entries.len(),
            path.display()
        );
        Ok(repository)
    }

    /// Load from a JSON file, starting empty if it cannot be loaded.
    ///
    /// Arithmetic and fallback answers keep working without predefined
    /// questions, so a bad file is logged rather than fatal. A file that
    /// does not exist is an ordinary setup and only logged at `info`.
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::from_path(path) {
            Ok(repository) => repository,
            Err(e) if e.is_not_found() => {
                info!(
                    "No questions file at {}; predefined answers disabled",
                    path.display()
                );
                Self::empty()
            }
            Err(e) => {
                error!("{}", e);
                Self::empty()
            }
        }
    }

    /// File the entries were loaded from, if any
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

impl QuestionRepository for JsonQuestionRepository {
    fn find_answer(&self, normalized_key: &str) -> Option<String> {
        self.entries.get(&normalize_question(normalized_key)).cloned()
    }

    fn all_entries(&self) -> &HashMap<String, String> {
        &self.entries
    }
}
