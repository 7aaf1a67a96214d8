//! Application layer use cases for the launcher.
//!
//! # What use cases does the launcher have?
//!
//! - **`resolve_config`** – Fills in configuration values from the platform
//!   lookup or built-in defaults, without overriding anything the user set.
//!
//! - **`deploy`** – One-time file deployment: mod user configs into the game
//!   install, and the radio plugin into the voice client.
//!
//! - **`launch_game`** – Runs the whole sequence and starts the game.
//!
//! - **`interaction`** – The ports through which use cases talk to the user
//!   (notices, confirmations, log lines).
//!
//! This layer only sees OS services through traits.  The implementations live
//! in `infrastructure` and are injected by `main`.

pub mod deploy;
pub mod interaction;
pub mod launch_game;
pub mod resolve_config;
