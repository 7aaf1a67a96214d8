//! End-to-end tests for the launch sequence.
//!
//! Real directories under the system temp dir stand in for the game install,
//! the TeamSpeak install and the updater's mod folder.  The registry, the
//! dialogs and the game process are replaced by recording mocks.

use std::fs;
use std::path::{Path, PathBuf};

use arma_launcher::application::deploy::DeployError;
use arma_launcher::application::launch_game::{
    LaunchError, LaunchGameUseCase, LaunchServices, UsageError,
};
use arma_launcher::application::resolve_config::{ARMA3_LOOKUP, TS3_LOOKUP};
use arma_launcher::infrastructure::filesystem::LocalFileOps;
use arma_launcher::infrastructure::logging::MemoryLogSink;
use arma_launcher::infrastructure::path_lookup::mock::RecordingPathLookup;
use arma_launcher::infrastructure::process::mock::RecordingRunner;
use arma_launcher::infrastructure::prompt::mock::ScriptedPrompt;
use arma_launcher::infrastructure::storage::config::ConfigStore;
use launcher_core::{normalize_mod_root, ConfigKey, Configuration};
use uuid::Uuid;

// ── Fixture ───────────────────────────────────────────────────────────────────

/// A scratch machine: game, voice client and mod folder under one root.
struct Machine {
    root: PathBuf,
}

impl Machine {
    fn new() -> Self {
        let root = std::env::temp_dir().join(format!("launcher_it_{}", Uuid::new_v4()));
        let machine = Self { root };

        fs::create_dir_all(machine.game()).unwrap();
        write(&machine.ts3().join("ts3client_win64.exe"), "client");
        write(
            &machine.mods().join("@cba_a3/userconfig/cba/settings.hpp"),
            "cba defaults",
        );
        write(
            &machine.mods().join("@acre2/plugin/acre2_win64.dll"),
            "plugin 64",
        );
        write(
            &machine.mods().join("@acre2/plugin/acre2_win32.dll"),
            "plugin 32",
        );
        machine
    }

    fn game(&self) -> PathBuf {
        self.root.join("Arma 3")
    }

    fn ts3(&self) -> PathBuf {
        self.root.join("TeamSpeak 3 Client")
    }

    /// The updater's mod folder, also the launcher's working directory.
    fn mods(&self) -> PathBuf {
        self.root.join("mods")
    }

    fn store(&self) -> ConfigStore {
        ConfigStore::new(self.root.join("arma-launcher.toml"))
    }

    /// A lookup that finds both installs at their first location.
    fn registry(&self) -> RecordingPathLookup {
        RecordingPathLookup::new()
            .with_value(ARMA3_LOOKUP.locations[0], path_str(&self.game()))
            .with_value(TS3_LOOKUP.locations[2], path_str(&self.ts3()))
    }

    /// Configuration as the user would have it after setting `modfolder`.
    fn config_with_mod_folder(&self) -> Configuration {
        let mut config = Configuration::new();
        config.set(ConfigKey::ModFolder, path_str(&self.mods()));
        config
    }
}

impl Drop for Machine {
    fn drop(&mut self) {
        fs::remove_dir_all(&self.root).ok();
    }
}

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().expect("has parent")).unwrap();
    fs::write(path, content).unwrap();
}

fn path_str(path: &Path) -> &str {
    path.to_str().expect("temp paths are UTF-8")
}

fn tokens(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Runs one launch against `machine` and returns the result plus the mocks.
struct Run {
    result: Result<arma_launcher::application::launch_game::LaunchOutcome, LaunchError>,
    config: Configuration,
    lookup: RecordingPathLookup,
    prompt: ScriptedPrompt,
    runner: RecordingRunner,
    log: MemoryLogSink,
}

fn launch(
    machine: &Machine,
    mut config: Configuration,
    lookup: RecordingPathLookup,
    prompt: ScriptedPrompt,
    runner: RecordingRunner,
    args: &[&str],
) -> Run {
    let files = LocalFileOps::new();
    let store = machine.store();
    let log = MemoryLogSink::new();
    let services = LaunchServices {
        lookup: &lookup,
        files: &files,
        prompt: &prompt,
        runner: &runner,
        store: &store,
        log: &log,
    };

    let result = LaunchGameUseCase::new(services, machine.mods()).run(&mut config, &tokens(args));
    Run {
        result,
        config,
        lookup,
        prompt,
        runner,
        log,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[test]
fn test_first_launch_deploys_everything_and_starts_game() {
    // Arrange
    let machine = Machine::new();

    // Act
    let run = launch(
        &machine,
        machine.config_with_mod_folder(),
        machine.registry(),
        ScriptedPrompt::accepting(),
        RecordingRunner::exiting_with(0),
        &["arma3", "@cba_a3", "@acre2"],
    );

    // Assert
    let outcome = run.result.expect("launch succeeds");
    let mod_root = normalize_mod_root(path_str(&machine.mods()));
    assert_eq!(outcome.spec.executable, machine.game().join("arma3.exe"));
    assert_eq!(outcome.spec.working_dir, machine.game());
    assert_eq!(
        outcome.spec.arguments,
        format!(
            "-world=empty -noSplash -noFilePatching -mod=\"{mod_root}@cba_a3;{mod_root}@acre2\""
        )
    );
    assert_eq!(outcome.exit_code, Some(0));
    assert_eq!(run.runner.runs(), vec![outcome.spec.clone()]);

    assert_eq!(
        fs::read_to_string(machine.game().join("userconfig/cba/settings.hpp")).unwrap(),
        "cba defaults"
    );
    assert_eq!(
        fs::read_to_string(machine.ts3().join("plugins/acre2_win64.dll")).unwrap(),
        "plugin 64"
    );
    assert_eq!(run.prompt.confirm_count(), 1, "plugin copy is confirmed");
    assert_eq!(run.prompt.notify_count(), 2, "userconfig and plugin notices");
    assert!(run.log.contains("Starting game!"));
}

#[test]
fn test_discovered_paths_are_saved_and_not_looked_up_again() {
    // Arrange
    let machine = Machine::new();
    let first = launch(
        &machine,
        machine.config_with_mod_folder(),
        machine.registry(),
        ScriptedPrompt::accepting(),
        RecordingRunner::exiting_with(0),
        &["arma3"],
    );
    first.result.expect("first launch");
    assert!(!first.lookup.calls().is_empty());

    // Act
    let saved = machine.store().load().expect("config saved");
    let second = launch(
        &machine,
        saved.clone(),
        RecordingPathLookup::new(),
        ScriptedPrompt::accepting(),
        RecordingRunner::exiting_with(0),
        &["arma3"],
    );

    // Assert
    assert_eq!(saved.get(ConfigKey::Arma3Path), Some(path_str(&machine.game())));
    assert_eq!(saved.get(ConfigKey::Ts3Path), Some(path_str(&machine.ts3())));
    assert_eq!(
        saved.get(ConfigKey::AdditionalArguments),
        Some("-world=empty -noSplash -noFilePatching")
    );
    assert_eq!(saved.get(ConfigKey::ShowLogWindow), Some("false"));

    second.result.expect("second launch");
    assert!(second.lookup.calls().is_empty(), "no lookups on later runs");
    assert_eq!(second.prompt.confirm_count(), 0, "plugin already deployed");
    assert_eq!(second.prompt.notify_count(), 0, "userconfig already deployed");
    assert_eq!(second.config, saved);
}

#[test]
fn test_missing_profile_is_usage_error_after_saving() {
    // Arrange
    let machine = Machine::new();

    // Act
    let run = launch(
        &machine,
        machine.config_with_mod_folder(),
        machine.registry(),
        ScriptedPrompt::accepting(),
        RecordingRunner::exiting_with(0),
        &[],
    );

    // Assert
    let err = run.result.expect_err("no profile");
    assert!(matches!(err, LaunchError::Usage(UsageError::MissingProfile)));
    assert_eq!(err.exit_code(), 0, "a bare invocation exits cleanly");
    assert!(run.runner.runs().is_empty());
    assert!(machine.store().path().is_file(), "config is saved before validation");
    assert!(!machine.game().join("userconfig").exists());
}

#[test]
fn test_unsupported_profile_is_usage_error() {
    let machine = Machine::new();

    let run = launch(
        &machine,
        machine.config_with_mod_folder(),
        machine.registry(),
        ScriptedPrompt::accepting(),
        RecordingRunner::exiting_with(0),
        &["dayz", "@cba_a3"],
    );

    let err = run.result.expect_err("dayz is not supported");
    assert!(matches!(err, LaunchError::Usage(UsageError::UnsupportedProfile(ref p)) if p == "dayz"));
    assert!(run.runner.runs().is_empty());
}

#[test]
fn test_missing_voice_client_is_config_error_naming_key() {
    // Arrange: only the game is registered.
    let machine = Machine::new();
    let lookup =
        RecordingPathLookup::new().with_value(ARMA3_LOOKUP.locations[0], path_str(&machine.game()));

    // Act
    let run = launch(
        &machine,
        machine.config_with_mod_folder(),
        lookup,
        ScriptedPrompt::accepting(),
        RecordingRunner::exiting_with(0),
        &["arma3"],
    );

    // Assert
    match run.result {
        Err(LaunchError::Config {
            key, config_file, ..
        }) => {
            assert_eq!(key, ConfigKey::Ts3Path);
            assert_eq!(config_file, machine.store().path());
        }
        other => panic!("expected config error, got {other:?}"),
    }
    assert!(run.runner.runs().is_empty());
}

#[test]
fn test_unset_mod_folder_is_config_error() {
    let machine = Machine::new();

    let run = launch(
        &machine,
        Configuration::new(),
        machine.registry(),
        ScriptedPrompt::accepting(),
        RecordingRunner::exiting_with(0),
        &["arma3"],
    );

    assert!(matches!(
        run.result,
        Err(LaunchError::Config {
            key: ConfigKey::ModFolder,
            ..
        })
    ));
    let saved = machine.store().load().expect("saved");
    assert_eq!(saved.get(ConfigKey::ModFolder), Some(""));
}

#[test]
fn test_declining_plugin_copy_aborts_launch() {
    // Arrange
    let machine = Machine::new();

    // Act
    let run = launch(
        &machine,
        machine.config_with_mod_folder(),
        machine.registry(),
        ScriptedPrompt::cancelling(),
        RecordingRunner::exiting_with(0),
        &["arma3", "@acre2"],
    );

    // Assert
    let err = run.result.expect_err("cancelled");
    assert!(matches!(err, LaunchError::Cancelled));
    assert_eq!(err.exit_code(), 1);
    assert!(run.runner.runs().is_empty());
    assert!(!machine.ts3().join("plugins/acre2_win64.dll").exists());
}

#[test]
fn test_spawn_failure_is_reported() {
    let machine = Machine::new();

    let run = launch(
        &machine,
        machine.config_with_mod_folder(),
        machine.registry(),
        ScriptedPrompt::accepting(),
        RecordingRunner::failing(),
        &["arma3"],
    );

    let err = run.result.expect_err("spawn fails");
    assert!(matches!(err, LaunchError::Spawn(_)));
    assert_eq!(err.title(), "Error starting the game");
    assert_eq!(run.runner.runs().len(), 1);
}

#[cfg(unix)]
#[test]
fn test_userconfig_copy_failure_stops_launch_before_spawn() {
    // Arrange: a mod ships a settings file that is a dangling link.
    let machine = Machine::new();
    let source = machine.mods().join("@broken").join("userconfig");
    fs::create_dir_all(&source).unwrap();
    std::os::unix::fs::symlink(machine.root.join("gone.hpp"), source.join("broken.hpp")).unwrap();

    // Act
    let run = launch(
        &machine,
        machine.config_with_mod_folder(),
        machine.registry(),
        ScriptedPrompt::accepting(),
        RecordingRunner::exiting_with(0),
        &["arma3", "@broken"],
    );

    // Assert
    let err = run.result.expect_err("deploy fails");
    assert!(matches!(err, LaunchError::Deploy(DeployError::Io { .. })));
    assert_eq!(err.title(), "Deployment error");
    assert!(run.runner.runs().is_empty(), "the game must not start");
    assert!(!machine.ts3().join("plugins/acre2_win64.dll").exists());
}
