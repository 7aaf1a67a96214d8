//! Domain entities for the launcher.
//!
//! This module contains pure data types and rules with no infrastructure
//! dependencies: no registry, no file system, no process spawning.

/// The flat key/value configuration and its known keys.
pub mod config;

/// Game profiles and voice-client binary variants.
pub mod profile;
