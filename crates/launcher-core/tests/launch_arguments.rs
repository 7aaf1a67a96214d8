//! Integration tests for launch argument assembly through the public API.
//!
//! These tests combine the configuration model, profile parsing, and the
//! argument builder the same way the launcher binary does.

use std::path::Path;

use launcher_core::{
    build_launch_arguments, normalize_mod_root, ConfigKey, Configuration, GameProfile, LaunchSpec,
};

#[test]
fn test_launch_spec_from_default_configuration() {
    // Arrange
    let mut cfg = Configuration::new();
    cfg.set(ConfigKey::ModFolder, "C:/mods/");
    let tokens = vec!["arma3".to_string(), "@cba_a3".to_string(), "@acre2".to_string()];

    // Act
    let additional = cfg.get_or(
        ConfigKey::AdditionalArguments,
        ConfigKey::AdditionalArguments.default_value().unwrap_or_default(),
    );
    let root = cfg.get(ConfigKey::ModFolder).unwrap_or_default();
    let args = build_launch_arguments(&additional, &normalize_mod_root(root), &tokens);
    let profile: GameProfile = tokens[0].parse().expect("arma3 is supported");
    let spec = LaunchSpec::for_profile(profile, Path::new("/games/Arma 3"), args);

    // Assert
    assert_eq!(
        spec.arguments,
        r#"-world=empty -noSplash -noFilePatching -mod="C:/mods/@cba_a3;C:/mods/@acre2""#
    );
    assert_eq!(spec.executable, Path::new("/games/Arma 3").join("arma3.exe"));
}

#[test]
fn test_explicit_additional_arguments_replace_default() {
    let mut cfg = Configuration::new();
    cfg.set(ConfigKey::AdditionalArguments, "-window");

    let additional = cfg.get_or(ConfigKey::AdditionalArguments, "-noSplash");
    let args = build_launch_arguments(&additional, "/m/", &["arma3", "@a", "@b", "@c"]);

    assert_eq!(args, r#"-window -mod="/m/@a;/m/@b;/m/@c""#);
}

#[test]
fn test_unsupported_profile_is_rejected_before_building() {
    let result = "arma2".parse::<GameProfile>();
    assert!(result.is_err(), "only arma3 is a supported profile");
}
