//! Port for the answer transcript.
//!
//! [`AnswerLogger`] records every dispatched question together with the
//! strategy that answered it. This is separate from `tracing` output:
//! tracing carries diagnostics, the transcript carries one machine-readable
//! record per question.

use serde::Serialize;

/// One transcript record, tagged by `type` when serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum AnswerEvent {
    /// A strategy produced the answer
    #[serde(rename = "question_answered")]
    Answered {
        question: String,
        answer: String,
        strategy: String,
    },

    /// The chain had no strategy willing to answer
    #[serde(rename = "question_unanswered")]
    Unanswered { question: String },
}

impl AnswerEvent {
    pub fn answered(question: &str, answer: &str, strategy: &str) -> Self {
        AnswerEvent::Answered {
            question: question.to_string(),
            answer: answer.to_string(),
            strategy: strategy.to_string(),
        }
    }

    pub fn unanswered(question: &str) -> Self {
        AnswerEvent::Unanswered {
            question: question.to_string(),
        }
    }

    /// Value of the serialized `type` tag
    pub fn event_type(&self) -> &'static str {
        match self {
            AnswerEvent::Answered { .. } => "question_answered",
            AnswerEvent::Unanswered { .. } => "question_unanswered",
        }
    }
}

/// Sink for answer events.
///
/// `log` is synchronous and non-fallible; a failing transcript never changes
/// the answer returned to the caller.
pub trait AnswerLogger: Send + Sync {
    fn log(&self, event: AnswerEvent);
}

/// Discards every event (transcript disabled).
pub struct NoAnswerLogger;

impl AnswerLogger for NoAnswerLogger {
    fn log(&self, _event: AnswerEvent) {}
}
