//! Flat key/value launcher configuration.
//!
//! The configuration is a plain string → string map.  Five keys have meaning
//! to the launcher (see [`ConfigKey`]); any other key found in the file is
//! carried along untouched so a hand-edited file never loses data.
//!
//! The map is ordered (`BTreeMap`) so the file written back to disk is stable
//! from one run to the next.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Default value of `showLogWindow`: log lines stay hidden.
pub const DEFAULT_SHOW_LOG_WINDOW: &str = "false";

/// Default value of `additionalArguments`, prepended to every launch.
pub const DEFAULT_ADDITIONAL_ARGUMENTS: &str = "-world=empty -noSplash -noFilePatching";

/// Default value of `modfolder`.
///
/// An empty path fails the directory check, so the first run stops and asks
/// the user to fill it in.
pub const DEFAULT_MOD_FOLDER: &str = "";

/// The configuration keys the launcher reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    /// `"false"` hides log output; any other value shows it.
    ShowLogWindow,
    /// ArmA 3 installation directory.
    Arma3Path,
    /// TeamSpeak 3 client installation directory.
    Ts3Path,
    /// Arguments placed before the `-mod=` list.
    AdditionalArguments,
    /// Directory that contains the `@mod` folders named on the command line.
    ModFolder,
}

impl ConfigKey {
    /// Every known key, in the order the launcher resolves them.
    pub const ALL: [ConfigKey; 5] = [
        ConfigKey::ShowLogWindow,
        ConfigKey::Arma3Path,
        ConfigKey::Ts3Path,
        ConfigKey::AdditionalArguments,
        ConfigKey::ModFolder,
    ];

    /// Returns the key as it appears in the configuration file.
    pub fn as_str(self) -> &'static str {
        match self {
            ConfigKey::ShowLogWindow => "showLogWindow",
            ConfigKey::Arma3Path => "arma3path",
            ConfigKey::Ts3Path => "ts3path",
            ConfigKey::AdditionalArguments => "additionalArguments",
            ConfigKey::ModFolder => "modfolder",
        }
    }

    /// Returns the built-in default for this key.
    ///
    /// Path keys that are discovered through the platform lookup have no
    /// default: when nothing is found they stay unset.
    pub fn default_value(self) -> Option<&'static str> {
        match self {
            ConfigKey::ShowLogWindow => Some(DEFAULT_SHOW_LOG_WINDOW),
            ConfigKey::AdditionalArguments => Some(DEFAULT_ADDITIONAL_ARGUMENTS),
            ConfigKey::ModFolder => Some(DEFAULT_MOD_FOLDER),
            ConfigKey::Arma3Path | ConfigKey::Ts3Path => None,
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// In-memory launcher configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Configuration {
    values: BTreeMap<String, String>,
}

impl Configuration {
    /// Creates an empty configuration (first run).
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored value for `key`, if any.
    pub fn get(&self, key: ConfigKey) -> Option<&str> {
        self.values.get(key.as_str()).map(String::as_str)
    }

    /// Returns the stored value for `key`, or `default` when it is absent.
    pub fn get_or(&self, key: ConfigKey, default: &str) -> String {
        self.get(key).unwrap_or(default).to_string()
    }

    /// Returns `true` if `key` has a stored value (even an empty one).
    pub fn contains(&self, key: ConfigKey) -> bool {
        self.values.contains_key(key.as_str())
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub fn set(&mut self, key: ConfigKey, value: impl Into<String>) {
        self.values.insert(key.as_str().to_string(), value.into());
    }

    /// Returns `true` when log output should be shown.
    ///
    /// Only a stored value other than `"false"` turns the log on.
    pub fn log_window_enabled(&self) -> bool {
        self.get(ConfigKey::ShowLogWindow)
            .is_some_and(|v| v != DEFAULT_SHOW_LOG_WINDOW)
    }

    /// Iterates over every stored entry, known and unknown keys alike.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
