//! Game process execution.
//!
//! [`StdProcessRunner`] starts the executable of a
//! [`LaunchSpec`] with its install directory as the working directory and
//! blocks until the game exits.
//!
//! # Argument passing
//!
//! The game parses its own command line, so on Windows the argument string
//! is handed over untouched with `CommandExt::raw_arg`.  Re-quoting it would
//! break `-mod="a;b"`.  Other platforms have no single command-line string;
//! there the text is split with [`split_arguments`].

use launcher_core::LaunchSpec;
use std::process::Command;
use tracing::info;

use crate::application::launch_game::{ProcessError, ProcessRunner};

pub mod mock;

/// Runs the game with `std::process::Command`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdProcessRunner;

impl StdProcessRunner {
    pub fn new() -> Self {
        Self
    }

    fn command(spec: &LaunchSpec) -> Command {
        let mut command = Command::new(&spec.executable);
        command.current_dir(&spec.working_dir);

        #[cfg(target_os = "windows")]
        {
            use std::os::windows::process::CommandExt;
            command.raw_arg(&spec.arguments);
        }
        #[cfg(not(target_os = "windows"))]
        command.args(split_arguments(&spec.arguments));

        command
    }
}

impl ProcessRunner for StdProcessRunner {
    fn run(&self, spec: &LaunchSpec) -> Result<Option<i32>, ProcessError> {
        let mut child = Self::command(spec)
            .spawn()
            .map_err(|source| ProcessError::Spawn {
                executable: spec.executable.clone(),
                source,
            })?;
        info!(pid = child.id(), "game process started");

        let status = child.wait().map_err(|source| ProcessError::Wait {
            executable: spec.executable.clone(),
            source,
        })?;
        info!(%status, "game process exited");
        Ok(status.code())
    }
}

/// Splits `text` on whitespace outside double quotes.  The quotes themselves
/// are dropped, so `-mod="a b;c"` becomes the single argument `-mod=a b;c`.
pub fn split_arguments(text: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_token = false;

    for c in text.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                has_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_token {
                    args.push(std::mem::take(&mut current));
                    has_token = false;
                }
            }
            c => {
                current.push(c);
                has_token = true;
            }
        }
    }
    if has_token {
        args.push(current);
    }
    args
}
