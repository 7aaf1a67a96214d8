//! Game profiles and voice-client binary variants.
//!
//! The first command-line token selects a [`GameProfile`]; it decides which
//! executable is started.  Only ArmA 3 is supported today, but the token is
//! parsed into an enum so an unknown profile is a typed error rather than a
//! silent fallthrough.
//!
//! [`ClientBinary`] describes the two builds of the TeamSpeak 3 client.  The
//! launcher looks for them in [`ClientBinary::SEARCH_ORDER`] and installs the
//! radio plugin built for whichever one it finds first.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors produced while interpreting the profile token.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProfileError {
    /// The token does not name a supported game.
    #[error("unsupported game type: {0}")]
    Unsupported(String),
}

/// A supported game, selected by the first command-line token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameProfile {
    Arma3,
}

impl GameProfile {
    /// Token that selects this profile on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            GameProfile::Arma3 => "arma3",
        }
    }

    /// File name of the game executable inside the install directory.
    pub fn executable_name(self) -> &'static str {
        match self {
            GameProfile::Arma3 => "arma3.exe",
        }
    }
}

impl FromStr for GameProfile {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "arma3" => Ok(GameProfile::Arma3),
            other => Err(ProfileError::Unsupported(other.to_string())),
        }
    }
}

impl fmt::Display for GameProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build variant of the voice client found in its install directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientBinary {
    Win64,
    Win32,
}

impl ClientBinary {
    /// Order in which install directories are searched: 64-bit first.
    pub const SEARCH_ORDER: [ClientBinary; 2] = [ClientBinary::Win64, ClientBinary::Win32];

    /// Executable whose presence identifies this variant.
    pub fn executable_name(self) -> &'static str {
        match self {
            ClientBinary::Win64 => "ts3client_win64.exe",
            ClientBinary::Win32 => "ts3client_win32.exe",
        }
    }

    /// Plugin file built for this variant, e.g. `acre2_win64.dll` for prefix `acre2_`.
    pub fn plugin_file_name(self, prefix: &str) -> String {
        let suffix = match self {
            ClientBinary::Win64 => "win64",
            ClientBinary::Win32 => "win32",
        };
        format!("{prefix}{suffix}.dll")
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
