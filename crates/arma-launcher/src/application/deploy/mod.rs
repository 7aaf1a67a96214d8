//! One-time deployment of supporting files.
//!
//! - **`userconfig`** – Copies each mod's `userconfig/` tree into the game
//!   install without overwriting anything the user already has.
//! - **`plugin`** – Installs the radio plugin matching the voice client's
//!   build, after the user confirms the target path.
//!
//! Neither deployer keeps a record of what it did.  "Already deployed" is
//! read from the file system every time, which makes both operations safe to
//! repeat on every launch.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub mod plugin;
pub mod userconfig;

// ── File-system port ──────────────────────────────────────────────────────────

/// What a directory entry is, without following symbolic links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
    Symlink,
    Other,
}

/// One entry returned by [`FileOps::read_dir`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl DirEntry {
    pub fn new(path: impl Into<PathBuf>, kind: EntryKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    /// Last component of the entry's path.
    pub fn file_name(&self) -> Option<&OsStr> {
        self.path.file_name()
    }
}

/// File-system operations the deployers need.
///
/// The production implementation is `infrastructure::filesystem::LocalFileOps`.
#[cfg_attr(test, mockall::automock)]
pub trait FileOps {
    /// Returns `true` if `path` is an existing directory, following links.
    fn is_dir(&self, path: &Path) -> bool;

    /// Returns `true` if `path` is an existing regular file, following links.
    fn is_file(&self, path: &Path) -> bool;

    /// Returns `true` if anything, even a dangling link, exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Lists the entries of `dir`, sorted by file name.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error.
    fn read_dir(&self, dir: &Path) -> std::io::Result<Vec<DirEntry>>;

    /// Creates `dir` and any missing parents.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error.
    fn create_dir_all(&self, dir: &Path) -> std::io::Result<()>;

    /// Copies `from` to `to`, creating the parent directory of `to` if needed.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error.
    fn copy_file(&self, from: &Path, to: &Path) -> std::io::Result<()>;
}

// ── Errors ────────────────────────────────────────────────────────────────────

/// Error type for deployment operations.  Every variant ends the launch.
#[derive(Debug, Error)]
pub enum DeployError {
    /// A file-system operation failed part-way through a deployment.
    #[error("I/O error while deploying to {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The voice-client directory contains neither known executable.
    #[error(
        "tried to install the radio plugin, but cannot find the TeamSpeak 3 binary in {}. \
         This is a bug in the launcher, please report it. Meanwhile, edit ts3path in the \
         configuration file to point at the TeamSpeak 3 install directory",
        client_dir.display()
    )]
    ClientBinaryNotFound { client_dir: PathBuf },

    /// The user declined the plugin deployment.
    #[error("plugin deployment cancelled by the user")]
    Cancelled,
}

impl DeployError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| DeployError::Io { path, source }
    }
}
