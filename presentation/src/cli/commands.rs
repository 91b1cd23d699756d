//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Question and answer, colored
    Text,
    /// JSON object with question, answer and timestamp
    Json,
}

/// CLI arguments for answerbot
#[derive(Parser, Debug)]
#[command(name = "answerbot")]
#[command(author, version, about = "Answers arithmetic and predefined questions")]
#[command(long_about = r#"
answerbot answers short questions.

Arithmetic questions starting with "what is", "calculate", "compute",
"solve" or "evaluate" are evaluated. Other questions are looked up in the
predefined question file; anything else gets a polite canned reply.

Configuration files are loaded from (in priority order):
1. ANSWERBOT_* environment variables (e.g. ANSWERBOT_CACHE__ENABLED=false)
2. --config <path>       Explicit config file
3. ./answerbot.toml      Project-level config
4. ~/.config/answerbot/config.toml   Global config

Example:
  answerbot "What is 50 + 20?"
  answerbot --questions faq.json "Who are you?"
  answerbot --chat
  answerbot --serve --port 8080
"#)]
pub struct Cli {
    /// The question to answer (not required in chat or serve mode)
    pub question: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long, conflicts_with = "serve")]
    pub chat: bool,

    /// Start the HTTP server
    #[arg(long)]
    pub serve: bool,

    /// Address to bind in serve mode (overrides config)
    #[arg(long, value_name = "HOST", requires = "serve")]
    pub host: Option<String>,

    /// Port to bind in serve mode (overrides config)
    #[arg(long, value_name = "PORT", requires = "serve")]
    pub port: Option<u16>,

    /// JSON file of predefined question/answer pairs (overrides config)
    #[arg(long, value_name = "PATH")]
    pub questions: Option<PathBuf>,

    /// Disable the answer cache
    #[arg(long)]
    pub no_cache: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print only the answer
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_single_question() {
        let cli = Cli::parse_from(["answerbot", "What is 2+2?"]);
        assert_eq!(cli.question.as_deref(), Some("What is 2+2?"));
        assert_eq!(cli.output, OutputFormat::Text);
        assert!(!cli.chat);
        assert!(!cli.serve);
    }

    #[test]
    fn test_serve_flags() {
        let cli = Cli::parse_from(["answerbot", "--serve", "--port", "9000", "--no-cache"]);
        assert!(cli.serve);
        assert_eq!(cli.port, Some(9000));
        assert!(cli.no_cache);
    }

    #[test]
    fn test_port_requires_serve() {
        assert!(Cli::try_parse_from(["answerbot", "--port", "9000"]).is_err());
    }

    #[test]
    fn test_chat_conflicts_with_serve() {
        assert!(Cli::try_parse_from(["answerbot", "--chat", "--serve"]).is_err());
    }

    #[test]
    fn test_verbosity_and_json() {
        let cli = Cli::parse_from(["answerbot", "-vv", "-o", "json", "hi there"]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.output, OutputFormat::Json);
    }
}
