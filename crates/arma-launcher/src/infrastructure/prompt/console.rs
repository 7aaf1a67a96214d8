//! Terminal prompt: messages on stderr, answers on stdin.

use std::io::{self, BufRead, Write};
use std::sync::Mutex;

use crate::application::interaction::{Confirmation, UserPrompt};

/// Writes dialogs to `output` and reads confirmations from `input`.
///
/// [`ConsolePrompt::new`] binds stdin and stderr; tests pass buffers.
pub struct ConsolePrompt<R, W> {
    input: Mutex<R>,
    output: Mutex<W>,
}

impl ConsolePrompt<io::StdinLock<'static>, io::Stderr> {
    pub fn new() -> Self {
        Self::with_io(io::stdin().lock(), io::stderr())
    }
}

impl Default for ConsolePrompt<io::StdinLock<'static>, io::Stderr> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    pub fn with_io(input: R, output: W) -> Self {
        Self {
            input: Mutex::new(input),
            output: Mutex::new(output),
        }
    }

    fn write_block(&self, title: &str, message: &str, footer: &str) {
        let mut out = self.output.lock().unwrap_or_else(|e| e.into_inner());
        // A closed terminal is not worth failing the launch for.
        let _ = writeln!(out, "\n== {title} ==\n{message}");
        let _ = write!(out, "{footer}");
        let _ = out.flush();
    }
}

impl<R: BufRead, W: Write> UserPrompt for ConsolePrompt<R, W> {
    fn notify(&self, title: &str, message: &str) {
        self.write_block(title, message, "");
    }

    /// Only `y` or `yes` (any case) accepts.  An empty line or end of input
    /// cancels.
    fn confirm(&self, title: &str, message: &str) -> Confirmation {
        self.write_block(title, message, "Continue? [y/N] ");
        let mut answer = String::new();
        let read = self
            .input
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .read_line(&mut answer);
        match read {
            Ok(_) if matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes") => {
                Confirmation::Accept
            }
            _ => Confirmation::Cancel,
        }
    }
}
