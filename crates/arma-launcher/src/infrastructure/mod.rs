//! Infrastructure layer for the launcher.
//!
//! Contains OS-facing adapters: configuration file storage, the registry /
//! environment path lookup, user prompts, process spawning, file operations,
//! and log sinks.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `launcher_core`, but MUST NOT be imported by the `application` layer
//! (outside of tests).
//!
//! # Sub-modules
//!
//! - **`storage`** – Reads and writes the TOML configuration file that sits
//!   next to the executable.
//! - **`path_lookup`** – `PathLookup` implementations: the Windows registry,
//!   environment variables elsewhere, and a recording mock.
//! - **`prompt`** – `UserPrompt` implementations: Win32 message boxes, the
//!   terminal, and a scripted mock.
//! - **`process`** – Starts the game with `std::process` and waits for it.
//! - **`filesystem`** – `FileOps` on the local disk.
//! - **`logging`** – `LogSink` implementations backed by `tracing` or memory.

pub mod filesystem;
pub mod logging;
pub mod path_lookup;
pub mod process;
pub mod prompt;
pub mod storage;
