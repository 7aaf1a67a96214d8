//! ConfigResolver: merges stored configuration with platform path discovery.
//!
//! # Precedence
//!
//! For every key the launcher needs, the value comes from (in order):
//!
//! 1. The configuration file.  An explicit value always wins, even an empty one.
//! 2. The platform lookup ([`PathLookup`]), for the two install-path keys.  The
//!    first candidate location that yields a non-empty value wins and later
//!    locations are never queried.  A discovered value is written into the
//!    in-memory [`Configuration`] right away.
//! 3. The built-in default for the key, which is also written back so the
//!    user finds it in the file after the first run.
//!
//! The resolver never touches the disk.  The caller saves the configuration
//! once, after every key has been resolved, so the next run reads the cached
//! paths without querying the platform again.

use launcher_core::{ConfigKey, Configuration};

use super::interaction::LogSink;

/// Where to look for an install path on the current platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupSource {
    /// Name of the value to read at each location (empty = default value).
    pub category: &'static str,
    /// Candidate locations, queried in order.
    pub locations: &'static [&'static str],
}

/// ArmA 3 install directory: registry value `main`, 32-bit view first.
pub const ARMA3_LOOKUP: LookupSource = LookupSource {
    category: "main",
    locations: &[
        r"HKEY_LOCAL_MACHINE\SOFTWARE\Wow6432Node\bohemia interactive\arma 3",
        r"HKEY_LOCAL_MACHINE\SOFTWARE\bohemia interactive\arma 3",
    ],
};

/// TeamSpeak 3 install directory: default registry value, per-user keys first.
pub const TS3_LOOKUP: LookupSource = LookupSource {
    category: "",
    locations: &[
        r"HKEY_CURRENT_USER\SOFTWARE\Wow6432Node\TeamSpeak 3 Client",
        r"HKEY_CURRENT_USER\SOFTWARE\TeamSpeak 3 Client",
        r"HKEY_LOCAL_MACHINE\SOFTWARE\Wow6432Node\TeamSpeak 3 Client",
        r"HKEY_LOCAL_MACHINE\SOFTWARE\TeamSpeak 3 Client",
    ],
};

/// Platform capability that finds install paths.
///
/// Implementors only provide [`query`](PathLookup::query) for a single
/// location; [`lookup`](PathLookup::lookup) applies the first-match rule.
pub trait PathLookup {
    /// Reads `category` at one `location`.  `None` when the location or the
    /// value does not exist.
    fn query(&self, category: &str, location: &str) -> Option<String>;

    /// Returns the first non-empty value found across `locations`, in order.
    fn lookup(&self, category: &str, locations: &[&str]) -> Option<String> {
        locations
            .iter()
            .find_map(|location| self.query(category, location).filter(|v| !v.is_empty()))
    }
}

/// Applies the precedence rules above to one [`Configuration`].
pub struct ConfigResolver<'a> {
    config: &'a mut Configuration,
    lookup: &'a dyn PathLookup,
    log: &'a dyn LogSink,
}

impl<'a> ConfigResolver<'a> {
    pub fn new(
        config: &'a mut Configuration,
        lookup: &'a dyn PathLookup,
        log: &'a dyn LogSink,
    ) -> Self {
        Self { config, lookup, log }
    }

    /// Resolves a path-like key.
    ///
    /// Returns `None` (the "unset" state) when the key is absent from the
    /// configuration and no lookup location yields a value.  In that case the
    /// key stays absent.
    pub fn resolve(&mut self, key: ConfigKey, source: &LookupSource) -> Option<String> {
        if let Some(explicit) = self.config.get(key) {
            return Some(explicit.to_string());
        }

        let found = self.lookup.lookup(source.category, source.locations)?;
        self.log
            .line(&format!("{key} discovered by platform lookup: {found}"));
        self.config.set(key, found.clone());
        Some(found)
    }

    /// Resolves a key that has a built-in default, storing the default when
    /// the key is absent.
    pub fn resolve_or_default(&mut self, key: ConfigKey, default: &str) -> String {
        if let Some(explicit) = self.config.get(key) {
            return explicit.to_string();
        }
        self.config.set(key, default);
        default.to_string()
    }
}

/// The values of one resolution pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSettings {
    pub arma3_path: Option<String>,
    pub ts3_path: Option<String>,
    pub additional_arguments: String,
    pub mod_folder: String,
}

/// Resolves every key the launcher needs, in the order the launcher uses them.
///
/// `config` is updated in place; saving it is left to the caller.
pub fn resolve_settings(
    config: &mut Configuration,
    lookup: &dyn PathLookup,
    log: &dyn LogSink,
) -> ResolvedSettings {
    let mut resolver = ConfigResolver::new(config, lookup, log);

    resolver.resolve_or_default(
        ConfigKey::ShowLogWindow,
        default_for(ConfigKey::ShowLogWindow),
    );

    let arma3_path = resolver.resolve(ConfigKey::Arma3Path, &ARMA3_LOOKUP);
    log.line(&format!("ArmA 3 is at: {}", display_or_unset(&arma3_path)));

    let ts3_path = resolver.resolve(ConfigKey::Ts3Path, &TS3_LOOKUP);
    log.line(&format!("TS3 is at: {}", display_or_unset(&ts3_path)));

    let additional_arguments = resolver.resolve_or_default(
        ConfigKey::AdditionalArguments,
        default_for(ConfigKey::AdditionalArguments),
    );

    let mod_folder =
        resolver.resolve_or_default(ConfigKey::ModFolder, default_for(ConfigKey::ModFolder));
    log.line(&format!("Mod folder: {mod_folder}"));

    ResolvedSettings {
        arma3_path,
        ts3_path,
        additional_arguments,
        mod_folder,
    }
}

fn default_for(key: ConfigKey) -> &'static str {
    key.default_value().unwrap_or_default()
}

fn display_or_unset(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("<not set>")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
