//! Dialogs shown to the user.
//!
//! The launcher runs without a console window on Windows, so every
//! notice, confirmation and error is a modal message box there.  Elsewhere
//! the same text goes to the terminal.
//!
//! | Module    | OS            | Mechanism                            |
//! |-----------|---------------|--------------------------------------|
//! | `windows` | Windows       | `MessageBoxW`                        |
//! | `console` | anything else | stderr, answer read from stdin       |
//!
//! The right one is re-exported as `NativePrompt`.

pub mod console;
pub mod mock;

#[cfg(target_os = "windows")]
pub mod windows;

#[cfg(target_os = "windows")]
pub use windows::MessageBoxPrompt as NativePrompt;

#[cfg(not(target_os = "windows"))]
pub use console::ConsolePrompt as NativePrompt;
