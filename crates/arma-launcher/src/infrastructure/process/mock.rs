//! Recording [`ProcessRunner`] for tests.

use std::io;
use std::sync::Mutex;

use launcher_core::LaunchSpec;

use crate::application::launch_game::{ProcessError, ProcessRunner};

/// Records every spec it is asked to run instead of starting a process.
#[derive(Debug)]
pub struct RecordingRunner {
    exit_code: Option<i32>,
    fail_spawn: bool,
    runs: Mutex<Vec<LaunchSpec>>,
}

impl RecordingRunner {
    /// A runner whose "game" exits with `exit_code`.
    pub fn exiting_with(exit_code: i32) -> Self {
        Self {
            exit_code: Some(exit_code),
            fail_spawn: false,
            runs: Mutex::new(Vec::new()),
        }
    }

    /// A runner that fails as if the executable were missing.
    pub fn failing() -> Self {
        Self {
            exit_code: None,
            fail_spawn: true,
            runs: Mutex::new(Vec::new()),
        }
    }

    /// Every spec passed to `run`, in order.
    pub fn runs(&self) -> Vec<LaunchSpec> {
        self.runs.lock().expect("lock poisoned").clone()
    }
}

impl ProcessRunner for RecordingRunner {
    fn run(&self, spec: &LaunchSpec) -> Result<Option<i32>, ProcessError> {
        self.runs.lock().expect("lock poisoned").push(spec.clone());
        if self.fail_spawn {
            return Err(ProcessError::Spawn {
                executable: spec.executable.clone(),
                source: io::Error::new(io::ErrorKind::NotFound, "mock: no such file"),
            });
        }
        Ok(self.exit_code)
    }
}
