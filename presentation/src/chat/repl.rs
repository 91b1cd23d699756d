//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::ConsoleFormatter;
use answerbot_application::QuestionAnswerer;
use answerbot_domain::QuestionBounds;
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::warn;

const HISTORY_CAPACITY: usize = 1000;

/// Default history file under the platform data directory
pub fn default_history_path() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join("answerbot").join("history.txt"))
}

/// Result of a slash command
#[derive(Debug, PartialEq, Eq)]
enum CommandOutcome {
    Print(String),
    Quit,
}

/// Interactive chat REPL
pub struct ChatRepl {
    answerer: Arc<dyn QuestionAnswerer>,
    bounds: QuestionBounds,
    history_path: Option<PathBuf>,
}

impl ChatRepl {
    /// Create a new ChatRepl
    pub fn new(answerer: Arc<dyn QuestionAnswerer>) -> Self {
        Self {
            answerer,
            bounds: QuestionBounds::default(),
            history_path: default_history_path(),
        }
    }

    /// Set the accepted question length
    pub fn with_bounds(mut self, bounds: QuestionBounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Set the history file (`None` keeps history in memory only)
    pub fn with_history_path(mut self, path: Option<PathBuf>) -> Self {
        self.history_path = path;
        self
    }

    /// Run the interactive REPL
    pub fn run(&self) -> std::io::Result<()> {
        let mut line_editor = self.build_editor();
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("answerbot".to_string()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();

        loop {
            match line_editor.read_line(&prompt)? {
                Signal::Success(line) => {
                    let line = line.trim();

                    // Skip empty lines
                    if line.is_empty() {
                        continue;
                    }

                    if line.starts_with('/') {
                        match self.handle_command(line) {
                            CommandOutcome::Print(text) => println!("{}", text),
                            CommandOutcome::Quit => {
                                println!("Bye!");
                                break;
                            }
                        }
                        continue;
                    }

                    println!("{}", self.respond(line));
                    println!();
                }
                Signal::CtrlC => {
                    println!("^C");
                    continue;
                }
                Signal::CtrlD => {
                    println!("Bye!");
                    break;
                }
            }
        }

        Ok(())
    }

    fn build_editor(&self) -> Reedline {
        let line_editor = Reedline::create();

        let Some(path) = &self.history_path else {
            return line_editor;
        };
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
            Ok(history) => line_editor.with_history(Box::new(history)),
            Err(e) => {
                warn!("Could not open history file {}: {}", path.display(), e);
                line_editor
            }
        }
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│            answerbot - Chat Mode            │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Ask a question, e.g. \"What is (4 + 5) * 6?\"");
        println!();
        println!("{}", Self::help_text());
    }

    fn help_text() -> String {
        [
            "Commands:",
            "  /help, /h, /?    - Show this help",
            "  /stats           - Show answer cache statistics",
            "  /quit, /exit, /q - Exit chat",
        ]
        .join("\n")
    }

    fn handle_command(&self, cmd: &str) -> CommandOutcome {
        match cmd {
            "/quit" | "/exit" | "/q" => CommandOutcome::Quit,
            "/help" | "/h" | "/?" => CommandOutcome::Print(Self::help_text()),
            "/stats" => {
                CommandOutcome::Print(ConsoleFormatter::format_stats(self.answerer.cache_stats()))
            }
            _ => CommandOutcome::Print(format!(
                "Unknown command: {}\nType /help for available commands",
                cmd
            )),
        }
    }

    /// Answer one line of input, applying the length bounds first
    fn respond(&self, line: &str) -> String {
        let result = self
            .bounds
            .check(line)
            .and_then(|()| self.answerer.answer_question(line));

        match result {
            Ok(answer) => ConsoleFormatter::format_answer_only(&answer),
            Err(e) => ConsoleFormatter::format_error(&e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use answerbot_application::CacheStats;
    use answerbot_domain::{Answer, DomainError};

    struct EchoAnswerer;

    impl QuestionAnswerer for EchoAnswerer {
        fn answer_question(&self, question: &str) -> Result<Answer, DomainError> {
            Ok(Answer::new(format!("echo: {}", question)))
        }

        fn cache_stats(&self) -> Option<CacheStats> {
            Some(CacheStats {
                hits: 1,
                misses: 1,
                entries: 1,
            })
        }
    }

    fn repl() -> ChatRepl {
        ChatRepl::new(Arc::new(EchoAnswerer)).with_history_path(None)
    }

    #[test]
    fn test_respond_answers_question() {
        assert_eq!(repl().respond("What is 1+1?"), "echo: What is 1+1?");
    }

    #[test]
    fn test_respond_rejects_out_of_bounds() {
        let output = repl().respond("hi");
        assert!(output.contains("between 3 and 500"));

        let output = repl()
            .with_bounds(QuestionBounds::new(1, 5))
            .respond("a much longer question");
        assert!(output.contains("between 1 and 5"));
    }

    #[test]
    fn test_quit_commands() {
        let repl = repl();
        for cmd in ["/quit", "/exit", "/q"] {
            assert_eq!(repl.handle_command(cmd), CommandOutcome::Quit);
        }
    }

    #[test]
    fn test_stats_command() {
        match repl().handle_command("/stats") {
            CommandOutcome::Print(text) => assert!(text.contains("50.0%")),
            CommandOutcome::Quit => panic!("expected stats output"),
        }
    }

    #[test]
    fn test_unknown_command() {
        match repl().handle_command("/bogus") {
            CommandOutcome::Print(text) => assert!(text.contains("Unknown command: /bogus")),
            CommandOutcome::Quit => panic!("expected help hint"),
        }
    }
}
