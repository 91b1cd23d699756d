//! Interactive chat module
//!
//! Provides a reedline-based interactive question loop.

mod repl;

pub use repl::{ChatRepl, default_history_path};
