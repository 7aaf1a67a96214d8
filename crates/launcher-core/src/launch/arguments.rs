//! Launch argument builder.
//!
//! The game receives one argument string:
//!
//! ```text
//! <additionalArguments> -mod="<root>@first;<root>@second;..."
//! ```
//!
//! The first command-line token is the game profile, so it never appears in
//! the mod list.  Individual mod paths are not escaped: a folder name that
//! contains `;` or `"` produces a broken list.

use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use crate::domain::profile::GameProfile;

/// Separator between entries of the `-mod=` list.
const MOD_LIST_SEPARATOR: char = ';';

/// Everything needed to start the game process.  Built fresh on every run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSpec {
    /// Absolute path of the executable to start.
    pub executable: PathBuf,
    /// Directory the process is started in.
    pub working_dir: PathBuf,
    /// The complete argument string, passed through as-is.
    pub arguments: String,
}

impl LaunchSpec {
    /// Describes a launch of `profile` installed in `install_dir`.
    ///
    /// The game is started from its own install directory.
    pub fn for_profile(profile: GameProfile, install_dir: &Path, arguments: String) -> Self {
        Self {
            executable: install_dir.join(profile.executable_name()),
            working_dir: install_dir.to_path_buf(),
            arguments,
        }
    }
}

/// Builds the argument string from the configured arguments and the
/// command-line tokens.
///
/// `tokens` is the full positional input: `tokens[0]` is the profile and is
/// skipped, every later token is a mod folder name joined onto `mod_root`.
/// With no mod tokens the list is empty but still emitted as `-mod=""`.
pub fn build_launch_arguments<S: AsRef<str>>(
    additional_arguments: &str,
    mod_root: &str,
    tokens: &[S],
) -> String {
    let mut mods = String::new();
    for (i, token) in tokens.iter().skip(1).enumerate() {
        if i > 0 {
            mods.push(MOD_LIST_SEPARATOR);
        }
        mods.push_str(mod_root);
        mods.push_str(token.as_ref());
    }

    format!("{additional_arguments} -mod=\"{mods}\"")
}

/// Makes sure a non-empty mod root ends with a path separator so that
/// `root + token` forms a path.
pub fn normalize_mod_root(root: &str) -> String {
    if root.is_empty() || root.ends_with('\\') || root.ends_with('/') {
        root.to_string()
    } else {
        format!("{root}{MAIN_SEPARATOR}")
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
