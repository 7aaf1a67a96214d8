//! [`LogSink`] implementations and the log window.
//!
//! The launch sequence writes a short human-readable progress log.  In the
//! binary it goes through `tracing` under the `launcher` target, so its
//! visibility follows the subscriber's filter (`showLogWindow` or
//! `RUST_LOG`).  Tests capture it in memory instead.
//!
//! Release builds on Windows start without a console.  When `showLogWindow`
//! is enabled, [`open_log_window`] allocates one so the log has somewhere to
//! go; it stays open until the launcher exits.

use std::sync::Mutex;

use crate::application::interaction::LogSink;

/// Opens a console for log output when `enabled` is set.
///
/// Returns `true` if a new console was allocated.  On Windows this fails
/// when the process already has a console (debug builds); elsewhere the
/// launcher always runs attached to its terminal and nothing is done.
pub fn open_log_window(enabled: bool) -> bool {
    if !enabled {
        return false;
    }
    allocate_console()
}

#[cfg(target_os = "windows")]
fn allocate_console() -> bool {
    // SAFETY: AllocConsole takes no arguments and only fails, without side
    // effects, if the calling process already owns a console.
    unsafe { windows::Win32::System::Console::AllocConsole() }.is_ok()
}

#[cfg(not(target_os = "windows"))]
fn allocate_console() -> bool {
    false
}

/// Forwards log lines to `tracing` at `info` level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogSink;

impl TracingLogSink {
    pub fn new() -> Self {
        Self
    }
}

impl LogSink for TracingLogSink {
    fn line(&self, text: &str) {
        tracing::info!(target: "launcher", "{text}");
    }
}

/// Keeps log lines in memory.
#[derive(Debug, Default)]
pub struct MemoryLogSink {
    lines: Mutex<Vec<String>>,
}

impl MemoryLogSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines written so far, in order.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Returns `true` if any line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines().iter().any(|l| l.contains(needle))
    }
}

impl LogSink for MemoryLogSink {
    fn line(&self, text: &str) {
        self.lines
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_window_stays_closed_when_disabled() {
        assert!(!open_log_window(false));
    }

    #[cfg(not(target_os = "windows"))]
    #[test]
    fn test_log_window_uses_terminal_off_windows() {
        assert!(!open_log_window(true));
    }

    #[test]
    fn test_memory_sink_keeps_lines_in_order() {
        let log = MemoryLogSink::new();
        log.line("launcher starting");
        log.line("Mod folder: /srv/mods");

        assert_eq!(log.lines(), vec!["launcher starting", "Mod folder: /srv/mods"]);
        assert!(log.contains("/srv/mods"));
        assert!(!log.contains("ts3"));
    }
}
