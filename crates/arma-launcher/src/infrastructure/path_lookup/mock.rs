//! Recording [`PathLookup`] for tests.
//!
//! Values are keyed by location only.  Every query is recorded so tests can
//! check the lookup order and that explicit settings skip discovery.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::application::resolve_config::PathLookup;

/// A lookup answering from a fixed table and remembering every query.
#[derive(Debug, Default)]
pub struct RecordingPathLookup {
    values: HashMap<String, String>,
    calls: Mutex<Vec<(String, String)>>,
}

impl RecordingPathLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `location` answer with `value`.
    pub fn with_value(mut self, location: &str, value: &str) -> Self {
        self.values.insert(location.to_string(), value.to_string());
        self
    }

    /// Every `(category, location)` queried so far, in order.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().expect("lock poisoned").clone()
    }
}

impl PathLookup for RecordingPathLookup {
    fn query(&self, category: &str, location: &str) -> Option<String> {
        self.calls
            .lock()
            .expect("lock poisoned")
            .push((category.to_string(), location.to_string()));
        self.values.get(location).cloned()
    }
}
