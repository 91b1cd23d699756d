//! Logging infrastructure - structured answer transcripts.
//!
//! Provides [`JsonlAnswerLogger`], a JSONL file writer that implements
//! the [`AnswerLogger`](answerbot_application::AnswerLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlAnswerLogger;
