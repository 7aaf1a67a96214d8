//! UserConfigDeployer: merges mod `userconfig/` trees into the game install.
//!
//! Some mods ship default settings in `@mod/userconfig/`.  The game only reads
//! them from `<game>/userconfig/`, so the launcher copies them there once.
//!
//! # Merge rules
//!
//! - Files missing at the destination are copied.
//! - Files already present at the destination are left untouched, whatever
//!   their content.  The user may have edited them.
//! - Existing destination directories are descended into; missing ones are
//!   created.
//! - A destination entry of the other kind (a file where the source has a
//!   directory, or the reverse) is skipped.
//! - Inside a `userconfig/` tree, symbolic links to directories are skipped.
//!   Links to files are copied as the file they point to.  The `@mod` folders
//!   themselves may be links.
//!
//! Any I/O error aborts the whole call.  Files copied before the error stay
//! where they are.

use std::path::{Path, PathBuf};

use super::{DeployError, EntryKind, FileOps};
use crate::application::interaction::{LogSink, UserPrompt};

/// Directory-name prefix that marks a mod folder.
pub const MOD_DIR_PREFIX: &str = "@";

/// Name of the settings directory inside a mod and inside the game install.
pub const USERCONFIG_DIR: &str = "userconfig";

/// Copies mod user configs into the game install, one source at a time.
pub struct UserConfigDeployer<'a> {
    files: &'a dyn FileOps,
    prompt: &'a dyn UserPrompt,
    log: &'a dyn LogSink,
    dir_prefix: &'a str,
    subdir: &'a str,
}

impl<'a> UserConfigDeployer<'a> {
    /// Creates a deployer for `@*/userconfig` sources.
    pub fn new(files: &'a dyn FileOps, prompt: &'a dyn UserPrompt, log: &'a dyn LogSink) -> Self {
        Self {
            files,
            prompt,
            log,
            dir_prefix: MOD_DIR_PREFIX,
            subdir: USERCONFIG_DIR,
        }
    }

    /// Deploys every `<search_root>/<prefix>*/<subdir>` tree into `destination`.
    ///
    /// Each source that contributed at least one file is announced to the
    /// user, who may adjust the copied settings before acknowledging.
    ///
    /// Returns `true` if any file was copied.
    ///
    /// # Errors
    ///
    /// Returns [`DeployError::Io`] on the first file-system failure.
    pub fn deploy(&self, search_root: &Path, destination: &Path) -> Result<bool, DeployError> {
        let mut deployed_any = false;

        for source in find_sources(self.files, search_root, self.dir_prefix, self.subdir)? {
            let copied = copy_missing_files(self.files, &source, destination)?;
            if copied == 0 {
                continue;
            }
            deployed_any = true;
            self.log.line(&format!(
                "userconfig: deployed {} file(s) from {} to {}",
                copied,
                source.display(),
                destination.display()
            ));
            self.prompt.notify(
                "User config deployed",
                &format!(
                    "Deployed {}\n\nto\n\n{}\n\nThis is a one-time thing. You can adjust \
                     mod-specific settings there if you want to change them (do so now, then \
                     press OK to start the game).",
                    source.display(),
                    destination.display()
                ),
            );
        }

        Ok(deployed_any)
    }
}

/// Lists `<search_root>/<prefix>*/<subdir>` directories in file-name order.
///
/// # Errors
///
/// Returns [`DeployError::Io`] if `search_root` cannot be read.
pub fn find_sources(
    files: &dyn FileOps,
    search_root: &Path,
    prefix: &str,
    subdir: &str,
) -> Result<Vec<PathBuf>, DeployError> {
    let mut sources = Vec::new();

    for entry in files
        .read_dir(search_root)
        .map_err(DeployError::io(search_root))?
    {
        let matches_prefix = entry
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with(prefix));
        if !matches_prefix || !files.is_dir(&entry.path) {
            continue;
        }

        let candidate = entry.path.join(subdir);
        if files.is_dir(&candidate) {
            sources.push(candidate);
        }
    }

    Ok(sources)
}

/// Mirrors `source` into `destination`, copying only files that do not exist
/// there yet.  Returns the number of files copied.
///
/// # Errors
///
/// Returns [`DeployError::Io`] on the first file-system failure.
pub fn copy_missing_files(
    files: &dyn FileOps,
    source: &Path,
    destination: &Path,
) -> Result<usize, DeployError> {
    if files.exists(destination) {
        if !files.is_dir(destination) {
            return Ok(0);
        }
    } else {
        files
            .create_dir_all(destination)
            .map_err(DeployError::io(destination))?;
    }

    let mut copied = 0;
    for entry in files.read_dir(source).map_err(DeployError::io(source))? {
        let Some(name) = entry.file_name() else {
            continue;
        };
        let to = destination.join(name);

        match entry.kind {
            EntryKind::Dir => copied += copy_missing_files(files, &entry.path, &to)?,
            // A linked directory may point back up the tree.
            EntryKind::Symlink if files.is_dir(&entry.path) => {}
            EntryKind::File | EntryKind::Symlink => {
                if !files.exists(&to) {
                    files
                        .copy_file(&entry.path, &to)
                        .map_err(DeployError::io(&to))?;
                    copied += 1;
                }
            }
            EntryKind::Other => {}
        }
    }

    Ok(copied)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
