//! # launcher-core
//!
//! Shared library for the ArmA launcher containing the configuration model,
//! the supported game profiles, and the launch argument builder.
//!
//! This crate has zero dependencies on OS APIs, the registry, the file system,
//! or process spawning.  Everything here can be unit-tested on any platform.
//!
//! # Architecture overview (for beginners)
//!
//! The launcher is a small program that is started by a mod updater with a
//! game profile and a list of mod folders.  It finds the game and the voice
//! client, installs a couple of one-time files, and then runs the game with a
//! computed `-mod=` argument.
//!
//! This crate (`launcher-core`) is the pure part of that program:
//!
//! - **`domain`** – The flat key/value [`Configuration`] with its five known
//!   keys, the [`GameProfile`] selected by the first command-line token, and
//!   the [`ClientBinary`] variants of the voice client that decide which plugin
//!   file is installed.
//!
//! - **`launch`** – Turns configuration values and command-line tokens into a
//!   [`LaunchSpec`]: executable, working directory, and one argument string.

pub mod domain;
pub mod launch;

// Re-export the most-used types at the crate root so callers can write
// `launcher_core::Configuration` instead of `launcher_core::domain::config::Configuration`.
pub use domain::config::{ConfigKey, Configuration};
pub use domain::profile::{ClientBinary, GameProfile, ProfileError};
pub use launch::arguments::{build_launch_arguments, normalize_mod_root, LaunchSpec};
