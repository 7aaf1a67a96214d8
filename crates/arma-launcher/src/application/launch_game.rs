//! LaunchGameUseCase: the complete launch sequence.
//!
//! ```text
//! resolve settings ──► save config ──► validate paths ──► parse profile
//!        ──► deploy userconfig ──► deploy radio plugin
//!        ──► build arguments ──► spawn game ──► wait for exit
//! ```
//!
//! Every step either succeeds or ends the run with a [`LaunchError`] that tells
//! the user what to fix.  Nothing is retried and nothing continues after a
//! failure.  The configuration is saved before any validation so that paths
//! discovered on this run are kept even when the launch stops early.

use std::path::{Path, PathBuf};

use launcher_core::{
    build_launch_arguments, normalize_mod_root, ConfigKey, Configuration, GameProfile,
    LaunchSpec, ProfileError,
};
use thiserror::Error;

use super::deploy::plugin::PluginDeployer;
use super::deploy::userconfig::{UserConfigDeployer, USERCONFIG_DIR};
use super::deploy::{DeployError, FileOps};
use super::interaction::{LogSink, UserPrompt};
use super::resolve_config::{resolve_settings, PathLookup};

/// Radio mod whose TeamSpeak plugin is installed on first launch.
pub const RADIO_MOD_DIR: &str = "@acre2";

/// File-name prefix of the radio mod's plugin binaries.
pub const RADIO_PLUGIN_PREFIX: &str = "acre2_";

// ── Ports ─────────────────────────────────────────────────────────────────────

/// Error type for process execution.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The executable could not be started.
    #[error("error starting {}: {source}", executable.display())]
    Spawn {
        executable: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The process started but waiting for it failed.
    #[error("error waiting for {} to exit: {source}", executable.display())]
    Wait {
        executable: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Starts a process and blocks until it exits.
pub trait ProcessRunner {
    /// Runs `spec` to completion and returns its exit code, if it has one.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError`] if the process cannot be started or awaited.
    fn run(&self, spec: &LaunchSpec) -> Result<Option<i32>, ProcessError>;
}

/// Error raised when the configuration cannot be persisted.
#[derive(Debug, Error)]
#[error("failed to save configuration to {}: {source}", path.display())]
pub struct PersistError {
    pub path: PathBuf,
    #[source]
    pub source: Box<dyn std::error::Error + Send + Sync>,
}

/// Where the configuration lives between runs.
pub trait ConfigRepository {
    /// Path of the configuration file, quoted to the user in error messages.
    fn location(&self) -> &Path;

    /// Rewrites the stored configuration with `config`.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError`] if the file cannot be written.
    fn save(&self, config: &Configuration) -> Result<(), PersistError>;
}

// ── Errors ────────────────────────────────────────────────────────────────────

/// The command line did not describe a launch.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsageError {
    #[error(
        "This is a small launcher that starts the game for you. It expects the game type as \
         its first argument and the mods after it.\n\nPlease use the updater to launch instead."
    )]
    MissingProfile,

    #[error("Unsupported game type: {0}")]
    UnsupportedProfile(String),
}

impl From<ProfileError> for UsageError {
    fn from(err: ProfileError) -> Self {
        match err {
            ProfileError::Unsupported(token) => UsageError::UnsupportedProfile(token),
        }
    }
}

/// Every way a launch can end early.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// A required path is unset or does not exist.
    #[error("{message} Please edit {} manually and set {key}.", config_file.display())]
    Config {
        key: ConfigKey,
        message: String,
        config_file: PathBuf,
    },

    #[error(transparent)]
    Usage(#[from] UsageError),

    #[error(transparent)]
    Deploy(DeployError),

    #[error(transparent)]
    Spawn(#[from] ProcessError),

    #[error("Aborted.")]
    Cancelled,

    #[error(transparent)]
    Persist(#[from] PersistError),
}

impl From<DeployError> for LaunchError {
    fn from(err: DeployError) -> Self {
        match err {
            DeployError::Cancelled => LaunchError::Cancelled,
            other => LaunchError::Deploy(other),
        }
    }
}

impl LaunchError {
    /// Short heading for the message shown to the user.
    pub fn title(&self) -> &'static str {
        match self {
            LaunchError::Config { .. } | LaunchError::Persist(_) => "Configuration error",
            LaunchError::Usage(_) => "Usage error",
            LaunchError::Deploy(_) => "Deployment error",
            LaunchError::Spawn(_) => "Error starting the game",
            LaunchError::Cancelled => "Aborted",
        }
    }

    /// Process exit code for this failure.
    ///
    /// A bare invocation only explains how the launcher is meant to be
    /// started, so it exits cleanly with 0.  Other usage errors exit with 2,
    /// everything else with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            LaunchError::Usage(UsageError::MissingProfile) => 0,
            LaunchError::Usage(_) => 2,
            _ => 1,
        }
    }
}

// ── Use case ──────────────────────────────────────────────────────────────────

/// Collaborators of the launch sequence, created once in `main`.
#[derive(Clone, Copy)]
pub struct LaunchServices<'a> {
    pub lookup: &'a dyn PathLookup,
    pub files: &'a dyn FileOps,
    pub prompt: &'a dyn UserPrompt,
    pub runner: &'a dyn ProcessRunner,
    pub store: &'a dyn ConfigRepository,
    pub log: &'a dyn LogSink,
}

/// Result of a launch that ran the game to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchOutcome {
    pub spec: LaunchSpec,
    pub exit_code: Option<i32>,
}

/// Runs the launch sequence.
pub struct LaunchGameUseCase<'a> {
    services: LaunchServices<'a>,
    /// Directory scanned for `@mod` folders (the launcher's working directory).
    search_root: PathBuf,
}

impl<'a> LaunchGameUseCase<'a> {
    pub fn new(services: LaunchServices<'a>, search_root: impl Into<PathBuf>) -> Self {
        Self {
            services,
            search_root: search_root.into(),
        }
    }

    /// Launches the game described by `tokens` (profile first, then mods).
    ///
    /// `config` is updated with every resolved value and saved once.
    ///
    /// # Errors
    ///
    /// Returns a [`LaunchError`] for the first step that fails; no process is
    /// spawned in that case.
    pub fn run(
        &self,
        config: &mut Configuration,
        tokens: &[String],
    ) -> Result<LaunchOutcome, LaunchError> {
        let s = self.services;
        s.log.line("launcher starting");

        let settings = resolve_settings(config, s.lookup, s.log);
        s.store.save(config)?;

        let ts3_path = self.existing_dir(
            ConfigKey::Ts3Path,
            settings.ts3_path.as_deref(),
            "Cannot find TeamSpeak 3.",
        )?;
        self.existing_dir(
            ConfigKey::ModFolder,
            Some(settings.mod_folder.as_str()),
            "Cannot find your mod folder.",
        )?;

        let profile = tokens
            .first()
            .ok_or(UsageError::MissingProfile)?
            .parse::<GameProfile>()
            .map_err(UsageError::from)?;

        let game_dir = self.existing_dir(
            ConfigKey::Arma3Path,
            settings.arma3_path.as_deref(),
            "Cannot find ArmA 3.",
        )?;

        UserConfigDeployer::new(s.files, s.prompt, s.log)
            .deploy(&self.search_root, &game_dir.join(USERCONFIG_DIR))?;
        PluginDeployer::new(s.files, s.prompt, s.log).deploy(
            &self.search_root.join(RADIO_MOD_DIR),
            &ts3_path,
            RADIO_PLUGIN_PREFIX,
        )?;

        let arguments = build_launch_arguments(
            &settings.additional_arguments,
            &normalize_mod_root(&settings.mod_folder),
            tokens,
        );
        let spec = LaunchSpec::for_profile(profile, &game_dir, arguments);

        s.log.line(&format!("arguments: {}", spec.arguments));
        s.log.line("==============");
        s.log.line("Starting game!");
        s.log.line("Waiting for the game to exit.");
        let exit_code = s.runner.run(&spec)?;
        s.log.line(&format!(
            "Game exited ({})",
            exit_code.map_or_else(|| "no exit code".to_string(), |c| format!("code {c}"))
        ));

        Ok(LaunchOutcome { spec, exit_code })
    }

    /// Returns `value` as a path if it names an existing directory.
    fn existing_dir(
        &self,
        key: ConfigKey,
        value: Option<&str>,
        message: &str,
    ) -> Result<PathBuf, LaunchError> {
        match value {
            Some(v) if !v.is_empty() && self.services.files.is_dir(Path::new(v)) => {
                Ok(PathBuf::from(v))
            }
            _ => Err(LaunchError::Config {
                key,
                message: message.to_string(),
                config_file: self.services.store.location().to_path_buf(),
            }),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
