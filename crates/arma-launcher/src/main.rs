#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
//! ArmA 3 launcher: entry point.
//!
//! A mod updater runs this binary with the game profile and the mods to load.
//! It finds the game and TeamSpeak, installs mod settings and the radio
//! plugin, then starts the game and waits for it to exit.
//!
//! # Usage
//!
//! ```text
//! arma-launcher [OPTIONS] [PROFILE] [MODS]...
//!
//! Arguments:
//!   [PROFILE]  Game type; only `arma3` is supported
//!   [MODS]...  Mod folder names, relative to `modfolder`
//!
//! Options:
//!   --config <PATH>  Configuration file [env: ARMA_LAUNCHER_CONFIG]
//! ```
//!
//! # Exit codes
//!
//! | Code | Meaning                                                   |
//! |------|-----------------------------------------------------------|
//! | 0    | The game ran and exited, or no profile was given          |
//! | 1    | Configuration, deployment or start-up failure             |
//! | 2    | Unsupported profile                                       |
//!
//! Every failure is also shown to the user as a dialog.  Release builds on
//! Windows have no console; `showLogWindow` opens one for the log.

use std::path::PathBuf;

use anyhow::Context;
use arma_launcher::application::interaction::UserPrompt;
use arma_launcher::application::launch_game::{LaunchError, LaunchGameUseCase, LaunchServices};
use arma_launcher::infrastructure::filesystem::LocalFileOps;
use arma_launcher::infrastructure::logging::{open_log_window, TracingLogSink};
use arma_launcher::infrastructure::path_lookup::NativePathLookup;
use arma_launcher::infrastructure::process::StdProcessRunner;
use arma_launcher::infrastructure::prompt::NativePrompt;
use arma_launcher::infrastructure::storage::config::{
    default_config_path, ConfigError, ConfigStore,
};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Starts ArmA 3 with the given mods.
///
/// The profile is optional here so that a bare invocation gets the
/// launcher's own explanation instead of a parser error.
#[derive(Debug, Parser)]
#[command(
    name = "arma-launcher",
    about = "Starts ArmA 3 with mods, deploying their user configs and the radio plugin",
    version
)]
struct Cli {
    /// Configuration file to use instead of the one next to the executable.
    #[arg(long, env = "ARMA_LAUNCHER_CONFIG")]
    config: Option<PathBuf>,

    /// Game type.
    profile: Option<String>,

    /// Mod folder names, joined into the `-mod=` list in this order.
    mods: Vec<String>,
}

impl Cli {
    /// Profile followed by the mods, as the launch sequence expects them.
    fn tokens(&self) -> Vec<String> {
        self.profile
            .iter()
            .chain(self.mods.iter())
            .cloned()
            .collect()
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();
    let prompt = NativePrompt::new();

    let code = match run(&cli, &prompt) {
        Ok(()) => 0,
        Err(err) => report(&prompt, &err),
    };
    std::process::exit(code);
}

/// Loads the configuration, initialises logging and runs the launch sequence.
fn run(cli: &Cli, prompt: &dyn UserPrompt) -> anyhow::Result<()> {
    let path = match &cli.config {
        Some(path) => path.clone(),
        None => default_config_path()?,
    };
    let store = ConfigStore::new(path);
    let loaded = store.load();

    // The log level depends on the configuration, so logging starts only
    // once the file has been read (or has failed to read).
    let verbose = loaded.as_ref().is_ok_and(|c| c.log_window_enabled());
    open_log_window(verbose);
    init_tracing(verbose);
    info!(config = %store.path().display(), "configuration loaded");

    let mut config = loaded.context("cannot start without a readable configuration file")?;
    let search_root =
        std::env::current_dir().context("cannot determine the launcher's working directory")?;

    let lookup = NativePathLookup::new();
    let files = LocalFileOps::new();
    let runner = StdProcessRunner::new();
    let log = TracingLogSink::new();
    let services = LaunchServices {
        lookup: &lookup,
        files: &files,
        prompt,
        runner: &runner,
        store: &store,
        log: &log,
    };

    let outcome = LaunchGameUseCase::new(services, search_root).run(&mut config, &cli.tokens())?;
    info!(exit_code = ?outcome.exit_code, "launcher finished");
    Ok(())
}

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` wins when set.  Otherwise the launch log is visible (`info`)
/// only when `showLogWindow` is enabled, and warnings always are.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

/// How a failed run is presented to the user.
#[derive(Debug, PartialEq, Eq)]
struct Failure {
    title: &'static str,
    message: String,
    exit_code: i32,
}

impl Failure {
    fn from_error(err: &anyhow::Error) -> Self {
        if let Some(launch) = err.downcast_ref::<LaunchError>() {
            return Self {
                title: launch.title(),
                message: launch.to_string(),
                exit_code: launch.exit_code(),
            };
        }
        let title = if err.downcast_ref::<ConfigError>().is_some() {
            "Configuration error"
        } else {
            "Error"
        };
        Self {
            title,
            message: format!("{err:#}"),
            exit_code: 1,
        }
    }
}

/// Shows `err` to the user and returns the process exit code for it.
fn report(prompt: &dyn UserPrompt, err: &anyhow::Error) -> i32 {
    let failure = Failure::from_error(err);
    error!("{}", failure.message);
    prompt.notify(failure.title, &failure.message);
    failure.exit_code
}

// ── Tests ─────────────────────────────────────────────────────────────────────
