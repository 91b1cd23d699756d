//! Question repository adapters.
//!
//! Provides [`JsonQuestionRepository`], which implements the
//! [`QuestionRepository`](answerbot_domain::QuestionRepository) port from a
//! JSON file of question/answer pairs.

mod json_file;

pub use json_file::{JsonQuestionRepository, RepositoryError};
