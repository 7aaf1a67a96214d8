//! Registry-backed [`PathLookup`] for Windows.
//!
//! Each location is split into a predefined hive and a subkey path.  Only
//! `HKEY_LOCAL_MACHINE` and `HKEY_CURRENT_USER` are recognised.  A key or
//! value that does not exist is a plain miss; any other registry failure is
//! logged at `warn` and also treated as a miss, so the next location is tried.

use thiserror::Error;
use tracing::{debug, warn};
use winreg::enums::{HKEY_CURRENT_USER, HKEY_LOCAL_MACHINE};
use winreg::RegKey;

use crate::application::resolve_config::PathLookup;

#[derive(Debug, Error)]
enum LookupError {
    #[error("unsupported registry hive in {0}")]
    UnknownHive(String),

    #[error("registry error reading {location}: {source}")]
    Registry {
        location: String,
        #[source]
        source: std::io::Error,
    },
}

/// Reads string values from the Windows registry.
#[derive(Debug, Default, Clone, Copy)]
pub struct RegistryPathLookup;

impl RegistryPathLookup {
    pub fn new() -> Self {
        Self
    }

    fn read(&self, category: &str, location: &str) -> Result<Option<String>, LookupError> {
        let (hive, subkey) = split_hive(location)
            .ok_or_else(|| LookupError::UnknownHive(location.to_string()))?;
        let registry_error = |source: std::io::Error| LookupError::Registry {
            location: location.to_string(),
            source,
        };

        let key = match hive.root().open_subkey(subkey) {
            Ok(key) => key,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(registry_error(e)),
        };
        match key.get_value::<String, _>(category) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(registry_error(e)),
        }
    }
}

impl PathLookup for RegistryPathLookup {
    fn query(&self, category: &str, location: &str) -> Option<String> {
        match self.read(category, location) {
            Ok(found) => {
                debug!(location, category, found = found.is_some(), "registry lookup");
                found
            }
            Err(e) => {
                warn!("{e}");
                None
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Hive {
    LocalMachine,
    CurrentUser,
}

impl Hive {
    fn root(self) -> RegKey {
        match self {
            Hive::LocalMachine => RegKey::predef(HKEY_LOCAL_MACHINE),
            Hive::CurrentUser => RegKey::predef(HKEY_CURRENT_USER),
        }
    }
}

/// Splits `HIVE\sub\key` into the hive and `sub\key`.
fn split_hive(location: &str) -> Option<(Hive, &str)> {
    let (hive, subkey) = location.split_once('\\')?;
    let hive = match hive.to_ascii_uppercase().as_str() {
        "HKEY_LOCAL_MACHINE" | "HKLM" => Hive::LocalMachine,
        "HKEY_CURRENT_USER" | "HKCU" => Hive::CurrentUser,
        _ => return None,
    };
    Some((hive, subkey))
}
