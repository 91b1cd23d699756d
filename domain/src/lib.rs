//! Domain layer for answerbot
//!
//! This crate contains the core question-answering logic: value objects,
//! arithmetic expressions, and the answer strategies.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Strategy chain
//!
//! Every question is offered to an ordered list of strategies. The first
//! strategy that says it can answer produces the answer:
//!
//! - **Predefined**: canned answers from the question repository
//! - **Arithmetic**: "What is 3+4?" style questions, evaluated exactly once
//! - **Fallback**: a stable apology chosen by hashing the question
//!
//! ## Expressions
//!
//! Arithmetic bodies are validated by a pure grammar check and evaluated with
//! a two-stack operator-precedence pass over `+ - * /` and parentheses.

pub mod core;
pub mod expression;
pub mod repository;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{
    answer::Answer,
    error::DomainError,
    question::{Question, QuestionBounds},
    string::{normalize_key, normalize_question, stable_hash},
};
pub use expression::{
    ArithmeticEvaluator, ExpressionError, ExpressionEvaluator, format_number, is_valid_expression,
};
pub use repository::QuestionRepository;
pub use strategy::{
    AnswerStrategy, ArithmeticStrategy, CANNED_ANSWERS, FallbackStrategy, PredefinedStrategy,
    StrategyChain, StrategyChainBuilder, StrategyPriority, extract_expression,
};
