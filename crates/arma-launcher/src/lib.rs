//! arma-launcher library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # What does the launcher do? (for beginners)
//!
//! A mod updater starts this program with a game profile and a list of mod
//! folders, e.g. `arma-launcher arma3 @cba_a3 @acre2`.  The launcher then:
//!
//! 1. Reads its configuration file, filling in the ArmA 3 and TeamSpeak 3
//!    install paths from the registry (or environment) when they are missing,
//!    and saves the result for next time.
//! 2. Copies each mod's default `userconfig/` files into the game install,
//!    never overwriting files that are already there.
//! 3. Installs the radio mod's TeamSpeak plugin, once, after asking.
//! 4. Starts the game with a `-mod=` list built from the mod folders and
//!    waits for it to exit.

/// Application layer: use cases and the ports they depend on.
pub mod application;

/// Infrastructure layer: registry, file system, process, and UI adapters.
pub mod infrastructure;
