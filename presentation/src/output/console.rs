//! Console output formatter for answers

use answerbot_application::CacheStats;
use answerbot_domain::{Answer, DomainError};
use colored::Colorize;
use serde::Serialize;

/// JSON shape of a single answered question
#[derive(Debug, Serialize)]
struct AnswerOutput<'a> {
    question: &'a str,
    answer: &'a str,
    timestamp: String,
}

/// Formats answers for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a question and its answer
    pub fn format(question: &str, answer: &Answer) -> String {
        format!(
            "{} {}\n{} {}",
            "Q:".cyan().bold(),
            question.trim(),
            "A:".green().bold(),
            answer.as_str().trim_start()
        )
    }

    /// Format the answer alone (for --quiet)
    pub fn format_answer_only(answer: &Answer) -> String {
        answer.as_str().trim_start().to_string()
    }

    /// Format as JSON
    pub fn format_json(question: &str, answer: &Answer) -> String {
        let output = AnswerOutput {
            question,
            answer: answer.as_str(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };
        serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format a rejected question
    pub fn format_error(error: &DomainError) -> String {
        format!("{} {}", "Error:".red().bold(), error)
    }

    /// Format cache counters
    pub fn format_stats(stats: Option<CacheStats>) -> String {
        match stats {
            Some(stats) => {
                let lookups = stats.hits + stats.misses;
                let rate = if lookups == 0 {
                    0.0
                } else {
                    stats.hits as f64 * 100.0 / lookups as f64
                };
                format!(
                    "{}\n  Entries: {}\n  Hits:    {}\n  Misses:  {}\n  Hit rate: {:.1}%",
                    "Answer cache".cyan().bold(),
                    stats.entries,
                    stats.hits,
                    stats.misses,
                    rate
                )
            }
            None => format!("{}", "Answer cache is disabled".dimmed()),
        }
    }
}
