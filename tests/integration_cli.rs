// smt-rs: SCS Workshop Mod Toggler
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the CLI surface and configuration loading.

use smt_rs::cli::{self, Command};
use smt_rs::config::Config;
use smt_rs::steam::Game;

// =============================================================================
// Argument parsing
// =============================================================================

#[test]
fn cli_defaults_to_interactive() {
    let cli = cli::parse_from(["smt"]);
    assert!(cli.command.is_none());
    assert!(cli.global.game.is_none());
    assert!(!cli.global.dry);
}

#[test]
fn cli_full_noninteractive_invocation() {
    let cli = cli::parse_from([
        "smt",
        "--game",
        "ets2",
        "--workshop",
        "/steam/steamapps/workshop/content/227300",
        "--log-level",
        "2",
        "disable",
        "1234567890",
    ]);
    assert_eq!(cli.global.game, Some(Game::Ets2));
    assert!(cli.global.workshop.is_some());
    let Some(Command::Disable(args)) = cli.command else {
        panic!("expected disable");
    };
    assert_eq!(args.ids, vec!["1234567890"]);
}

// =============================================================================
// Config loading
// =============================================================================

#[test]
fn config_file_feeds_game_selection() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("smt.toml");
    std::fs::write(
        &path,
        r#"
[global]
dry = true

[game]
game = "ats"
workshop = "/steam/steamapps/workshop/content/270880"
"#,
    )
    .unwrap();

    let config = Config::from_file(&path).unwrap();
    assert!(config.global.dry);
    assert_eq!(config.game.game, Some(Game::Ats));
    assert_eq!(
        config.game.workshop.as_deref(),
        Some(std::path::Path::new("/steam/steamapps/workshop/content/270880"))
    );
}

#[test]
fn cli_overrides_beat_config_file() {
    let toml = r#"
[game]
game = "ets2"

[global]
dry = false
"#;
    let cli = cli::parse_from(["smt", "-g", "ats", "--dry"]);

    let mut loader = Config::builder().add_toml_str(toml);
    for (key, value) in cli.global.to_config_overrides() {
        loader = loader.set(&key, value).unwrap();
    }
    let config = loader.build().unwrap();

    assert_eq!(config.game.game, Some(Game::Ats));
    assert!(config.global.dry);
}
