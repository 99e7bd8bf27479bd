// smt-rs: SCS Workshop Mod Toggler
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::{Cli, Command};
use crate::steam::Game;
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_parse_no_command_is_interactive() {
    let cli = Cli::try_parse_from(["smt"]).unwrap();
    assert!(cli.command.is_none());
}

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["smt", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "smt", "-g", "ats", "-r", "/steam/steamapps/common/ATS", "-l", "5", "--dry", "list",
    ])
    .unwrap();
    assert_eq!(cli.global.game, Some(Game::Ats));
    assert_eq!(
        cli.global.root,
        Some(PathBuf::from("/steam/steamapps/common/ATS"))
    );
    assert_eq!(cli.global.log_level, Some(5));
    assert!(cli.global.dry);
    assert!(matches!(cli.command, Some(Command::List)));
}

#[test]
fn test_parse_rejects_unknown_game() {
    assert!(Cli::try_parse_from(["smt", "-g", "farming"]).is_err());
}

#[test]
fn test_parse_rejects_out_of_range_log_level() {
    assert!(Cli::try_parse_from(["smt", "-l", "9"]).is_err());
}

#[test]
fn test_parse_enable_with_ids() {
    let cli = Cli::try_parse_from(["smt", "enable", "123456789", "987654321"]).unwrap();
    let Some(Command::Enable(args)) = cli.command else {
        panic!("expected enable command");
    };
    assert_eq!(args.ids, vec!["123456789", "987654321"]);
}

#[test]
fn test_parse_disable_without_ids() {
    let cli = Cli::try_parse_from(["smt", "disable"]).unwrap();
    let Some(Command::Disable(args)) = cli.command else {
        panic!("expected disable command");
    };
    assert!(args.ids.is_empty());
}

#[test]
fn test_config_overrides_from_flags() {
    let cli = Cli::try_parse_from(["smt", "-g", "ets2", "--dry", "-l", "4"]).unwrap();
    let overrides = cli.global.to_config_overrides();
    let keys: Vec<&str> = overrides.iter().map(|(k, _)| k.as_str()).collect();
    insta::assert_debug_snapshot!(keys, @r#"
    [
        "game.game",
        "global.dry",
        "global.output_log_level",
        "global.file_log_level",
    ]
    "#);
}

#[test]
fn test_repeated_config_files() {
    let cli = Cli::try_parse_from(["smt", "-c", "a.toml", "-c", "b.toml", "options"]).unwrap();
    assert_eq!(
        cli.global.configs,
        vec![PathBuf::from("a.toml"), PathBuf::from("b.toml")]
    );
}
