//! Storage infrastructure: configuration file persistence.
//!
//! The `config` sub-module handles:
//!
//! - Locating the configuration file next to the launcher executable.
//! - Reading it, or starting from an empty configuration on first run.
//! - Rewriting it after every resolution pass.

pub mod config;
