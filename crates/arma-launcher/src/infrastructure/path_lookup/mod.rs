//! Install-path discovery for the game and the voice client.
//!
//! The application layer asks for install directories through the
//! [`PathLookup`](crate::application::resolve_config::PathLookup) port.  A
//! *location* is a registry key path with its hive spelled out, e.g.
//! `HKEY_LOCAL_MACHINE\SOFTWARE\bohemia interactive\arma 3`, and a *category*
//! is the value name inside that key (`""` for the key's default value).
//!
//! # Platform implementations
//!
//! | Module    | OS            | Source                                  |
//! |-----------|---------------|-----------------------------------------|
//! | `windows` | Windows       | Registry, via `winreg`                  |
//! | `env`     | anything else | `<LAST_KEY_SEGMENT>_PATH` env variables |
//!
//! The right one is re-exported as `NativePathLookup`.  [`mock`] is always
//! compiled so tests on any platform can record lookups.

pub mod env;
pub mod mock;

#[cfg(target_os = "windows")]
pub mod windows;

#[cfg(target_os = "windows")]
pub use windows::RegistryPathLookup as NativePathLookup;

#[cfg(not(target_os = "windows"))]
pub use env::EnvPathLookup as NativePathLookup;
