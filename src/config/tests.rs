// smt-rs: SCS Workshop Mod Toggler
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Config, ConfigLoader};
use crate::logging::LogLevel;
use crate::steam::Game;
use std::path::PathBuf;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert!(!config.global.dry);
    assert_eq!(config.global.output_log_level, LogLevel::INFO);
    assert_eq!(config.global.file_log_level, LogLevel::TRACE);
    assert!(config.game.game.is_none());
    assert!(config.game.root.is_none());
    assert!(config.game.workshop.is_none());
}

#[test]
fn test_config_parse() {
    let toml = r#"
[global]
dry = true
output_log_level = 4

[game]
game = "ats"
root = "/steam/steamapps/common/American Truck Simulator"
"#;
    let config = Config::parse(toml).unwrap();
    assert!(config.global.dry);
    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
    assert_eq!(config.game.game, Some(Game::Ats));
    assert_eq!(
        config.game.root,
        Some(PathBuf::from(
            "/steam/steamapps/common/American Truck Simulator"
        ))
    );
}

#[test]
fn test_config_rejects_unknown_keys() {
    let toml = r"
[global]
frobnicate = true
";
    assert!(Config::parse(toml).is_err());
}

#[test]
fn test_config_rejects_bad_log_level() {
    let toml = r"
[global]
output_log_level = 9
";
    assert!(Config::parse(toml).is_err());
}

#[test]
fn test_config_rejects_unknown_game() {
    let toml = r#"
[game]
game = "farming"
"#;
    assert!(Config::parse(toml).is_err());
}

#[test]
fn test_cli_override_wins() {
    let toml = r#"
[game]
game = "ets2"
"#;
    let config = Config::builder()
        .add_toml_str(toml)
        .set("game.game", "ats")
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(config.game.game, Some(Game::Ats));
}

#[test]
fn test_format_options_dump() {
    let mut config = Config::default();
    config.game.game = Some(Game::Ets2);
    config.global.log_file = PathBuf::from("smt.log");

    insta::assert_debug_snapshot!(config.format_options(), @r#"
    [
        "game.game               = ets2",
        "game.root               = ",
        "game.workshop           = ",
        "global.dry              = false",
        "global.file_log_level   = 5",
        "global.log_file         = smt.log",
        "global.output_log_level = 3",
    ]
    "#);
}

#[test]
fn test_loaded_files_listing() {
    let loader = ConfigLoader::new().add_toml_file_optional("does-not-exist.toml");
    assert!(loader.loaded_files().is_empty());
    assert!(loader.format_loaded_files().is_empty());
}
