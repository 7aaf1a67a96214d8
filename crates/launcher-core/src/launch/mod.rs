//! Launch description assembly.
//!
//! - **`arguments`** – Builds the single argument string handed to the game and
//!   the [`LaunchSpec`](arguments::LaunchSpec) that carries it to the process
//!   runner.

pub mod arguments;
