//! Application-level configuration.
//!
//! - [`EngineConfig`]: answer cache and question bounds

pub mod engine_config;

pub use engine_config::EngineConfig;
