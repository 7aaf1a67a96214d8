//! Environment-variable [`PathLookup`] for platforms without a registry.
//!
//! A location maps to one variable named after its last key segment,
//! upper-cased, with every non-alphanumeric character replaced by `_` and
//! `_PATH` appended:
//!
//! | Location ends in         | Variable                  |
//! |--------------------------|---------------------------|
//! | `...\arma 3`             | `ARMA_3_PATH`             |
//! | `...\TeamSpeak 3 Client` | `TEAMSPEAK_3_CLIENT_PATH` |
//!
//! Every location of a source maps to the same variable, so the first query
//! decides.  The category is ignored.

use crate::application::resolve_config::PathLookup;

/// Reads install paths from environment variables.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvPathLookup;

impl EnvPathLookup {
    pub fn new() -> Self {
        Self
    }
}

impl PathLookup for EnvPathLookup {
    fn query(&self, _category: &str, location: &str) -> Option<String> {
        let name = variable_name(location);
        let value = std::env::var(&name).ok();
        tracing::debug!(variable = %name, found = value.is_some(), "environment lookup");
        value
    }
}

/// Environment variable consulted for `location`.
pub fn variable_name(location: &str) -> String {
    let segment = location
        .rsplit(['\\', '/'])
        .find(|s| !s.is_empty())
        .unwrap_or(location);
    let stem: String = segment
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("{stem}_PATH")
}
