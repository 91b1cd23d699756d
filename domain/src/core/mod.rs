//! Core domain concepts shared across all subdomains.
//!
//! - [`question::Question`]: a non-blank question as the caller typed it
//! - [`answer::Answer`]: the text produced by a strategy
//! - [`error::DomainError`]: domain-level errors

pub mod answer;
pub mod error;
pub mod question;
pub mod string;
