//! Presentation layer for answerbot
//!
//! This crate contains CLI definitions, the console formatter, the
//! interactive chat loop, and the HTTP boundary.

pub mod chat;
pub mod cli;
pub mod http;
pub mod output;

// Re-export commonly used types
pub use chat::{ChatRepl, default_history_path};
pub use cli::commands::{Cli, OutputFormat};
pub use http::{AppState, HttpServer, HttpServerConfig};
pub use output::console::ConsoleFormatter;
