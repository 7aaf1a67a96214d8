//! User-facing ports: log lines, notices, and confirmations.
//!
//! The use cases never talk to a window, a terminal, or a global logger
//! directly.  They receive a [`LogSink`] for progress lines and a
//! [`UserPrompt`] for the handful of messages that need the user's attention.
//! Both are created once in `main` and passed down by reference.

/// The user's answer to a confirmation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Accept,
    Cancel,
}

/// Presents notices and yes/no questions to the user.
///
/// Production implementations live in `infrastructure::prompt` (a message box
/// on Windows, the terminal elsewhere).  Tests use
/// `infrastructure::prompt::mock::ScriptedPrompt`.
pub trait UserPrompt {
    /// Shows `message` and returns once the user has acknowledged it.
    fn notify(&self, title: &str, message: &str);

    /// Asks the user to accept or cancel the action described by `message`.
    fn confirm(&self, title: &str, message: &str) -> Confirmation;
}

/// Receives human-readable progress lines.
pub trait LogSink {
    /// Records one line of launcher progress.
    fn line(&self, text: &str);
}
