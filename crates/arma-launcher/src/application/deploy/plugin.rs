//! PluginDeployer: installs the radio mod's TeamSpeak plugin.
//!
//! The radio mod (`@acre2`) ships one plugin DLL per TeamSpeak build.  The
//! launcher inspects the TeamSpeak install to find out which build is there
//! (64-bit first, then 32-bit) and copies the matching DLL into
//! `<ts3>/plugins/`.
//!
//! The copy happens at most once: if the plugin file already exists nothing
//! is asked and nothing is copied.  Otherwise the user must confirm the target
//! path first; declining ends the launch.

use std::path::{Path, PathBuf};

use launcher_core::ClientBinary;

use super::{DeployError, FileOps};
use crate::application::interaction::{Confirmation, LogSink, UserPrompt};

/// Directory inside the mod that holds the plugin binaries.
pub const MOD_PLUGIN_DIR: &str = "plugin";

/// Directory inside the voice-client install that TeamSpeak loads plugins from.
pub const CLIENT_PLUGINS_DIR: &str = "plugins";

/// What a call to [`PluginDeployer::deploy`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PluginOutcome {
    /// The mod directory does not exist, so there is nothing to install.
    ModNotInstalled,
    /// The plugin file was already in place.
    AlreadyDeployed(PathBuf),
    /// The plugin file was copied to this path.
    Deployed(PathBuf),
}

/// Installs a single plugin file, after confirmation.
pub struct PluginDeployer<'a> {
    files: &'a dyn FileOps,
    prompt: &'a dyn UserPrompt,
    log: &'a dyn LogSink,
}

impl<'a> PluginDeployer<'a> {
    pub fn new(files: &'a dyn FileOps, prompt: &'a dyn UserPrompt, log: &'a dyn LogSink) -> Self {
        Self { files, prompt, log }
    }

    /// Installs `<mod_dir>/plugin/<prefix><variant>.dll` into
    /// `<client_dir>/plugins/`.
    ///
    /// # Errors
    ///
    /// - [`DeployError::ClientBinaryNotFound`] when `client_dir` holds neither
    ///   TeamSpeak executable.
    /// - [`DeployError::Cancelled`] when the user declines.
    /// - [`DeployError::Io`] when the copy fails.
    pub fn deploy(
        &self,
        mod_dir: &Path,
        client_dir: &Path,
        prefix: &str,
    ) -> Result<PluginOutcome, DeployError> {
        if !self.files.is_dir(mod_dir) {
            return Ok(PluginOutcome::ModNotInstalled);
        }

        let binary = detect_client_binary(self.files, client_dir).ok_or_else(|| {
            DeployError::ClientBinaryNotFound {
                client_dir: client_dir.to_path_buf(),
            }
        })?;
        let plugin_name = binary.plugin_file_name(prefix);
        let target = client_dir.join(CLIENT_PLUGINS_DIR).join(&plugin_name);

        if self.files.is_file(&target) {
            return Ok(PluginOutcome::AlreadyDeployed(target));
        }

        let answer = self.prompt.confirm(
            "Continue?",
            &format!(
                "About to deploy the {} TeamSpeak plugin ({}) to {}.\n\nIs this the correct \
                 path? If NOT, press Cancel now and edit ts3path in the configuration file.",
                mod_dir.display(),
                plugin_name,
                target.display()
            ),
        );
        if answer == Confirmation::Cancel {
            self.log.line("plugin deployment cancelled by the user");
            return Err(DeployError::Cancelled);
        }

        self.log
            .line(&format!("deploying radio plugin: {}", target.display()));
        let source = mod_dir.join(MOD_PLUGIN_DIR).join(&plugin_name);
        self.files
            .copy_file(&source, &target)
            .map_err(DeployError::io(&target))?;

        self.prompt.notify(
            "Plugin deployed",
            &format!(
                "Deployed the radio plugin to\n\n{}\n\nThis is a one-time thing. Please check \
                 in TeamSpeak that it is loaded, and restart TeamSpeak if necessary (as \
                 administrator).",
                target.display()
            ),
        );
        Ok(PluginOutcome::Deployed(target))
    }
}

/// Searches `client_dir` for the TeamSpeak executables in
/// [`ClientBinary::SEARCH_ORDER`].
pub fn detect_client_binary(files: &dyn FileOps, client_dir: &Path) -> Option<ClientBinary> {
    ClientBinary::SEARCH_ORDER
        .into_iter()
        .find(|binary| files.is_file(&client_dir.join(binary.executable_name())))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
