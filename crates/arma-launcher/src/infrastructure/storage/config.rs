//! TOML-based configuration persistence for the launcher.
//!
//! The configuration file sits next to the executable and is named after it:
//! `arma-launcher.exe` reads `arma-launcher.toml`.  It holds a single `[main]`
//! table of string values:
//!
//! ```toml
//! [main]
//! additionalArguments = "-world=empty -noSplash -noFilePatching"
//! arma3path = 'C:\Program Files (x86)\Steam\steamapps\common\Arma 3'
//! modfolder = 'D:\ArmaMods'
//! showLogWindow = "false"
//! ts3path = 'C:\Program Files\TeamSpeak 3 Client'
//! ```
//!
//! Windows paths are easiest to edit by hand in single-quoted TOML strings,
//! where backslashes need no escaping.
//!
//! # First run
//!
//! A missing file is not an error: the launcher starts from an empty
//! configuration and writes the resolved values back at the end of the
//! resolution pass.  The file is always rewritten as a whole, never merged.

use std::path::{Path, PathBuf};

use launcher_core::Configuration;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::launch_game::{ConfigRepository, PersistError};

/// Extension of the configuration file placed next to the executable.
pub const CONFIG_EXTENSION: &str = "toml";

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The path of the running executable could not be determined.
    #[error("could not determine the launcher executable path: {0}")]
    NoExecutablePath(#[source] std::io::Error),

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The config could not be serialized to TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// On-disk layout: everything lives in the `[main]` table.
#[derive(Debug, Default, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    main: Configuration,
}

/// Returns the configuration path for the executable at `exe`.
pub fn config_path_for(exe: &Path) -> PathBuf {
    exe.with_extension(CONFIG_EXTENSION)
}

/// Returns the configuration path for the running executable.
///
/// # Errors
///
/// Returns [`ConfigError::NoExecutablePath`] if the OS cannot report it.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let exe = std::env::current_exe().map_err(ConfigError::NoExecutablePath)?;
    Ok(config_path_for(&exe))
}

/// Loads and saves the launcher configuration at a fixed path.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the configuration file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the configuration, returning an empty one if the file does not
    /// exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] for file-system errors other than "not found",
    /// and [`ConfigError::Parse`] if the TOML is malformed.
    pub fn load(&self) -> Result<Configuration, ConfigError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => {
                let file: ConfigFile =
                    toml::from_str(&content).map_err(|source| ConfigError::Parse {
                        path: self.path.clone(),
                        source,
                    })?;
                Ok(file.main)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Configuration::new()),
            Err(e) => Err(ConfigError::Io {
                path: self.path.clone(),
                source: e,
            }),
        }
    }

    /// Rewrites the file with `config`.
    ///
    /// Creates the parent directory if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] for file-system failures or
    /// [`ConfigError::Serialize`] if serialization fails.
    pub fn save(&self, config: &Configuration) -> Result<(), ConfigError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        let file = ConfigFile {
            main: config.clone(),
        };
        let content = toml::to_string_pretty(&file)?;
        std::fs::write(&self.path, content).map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            source,
        })?;
        Ok(())
    }
}

impl ConfigRepository for ConfigStore {
    fn location(&self) -> &Path {
        self.path()
    }

    fn save(&self, config: &Configuration) -> Result<(), PersistError> {
        ConfigStore::save(self, config).map_err(|e| PersistError {
            path: self.path.clone(),
            source: Box::new(e),
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
