// smt-rs: SCS Workshop Mod Toggler
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --config FILE     ← Additional config files (can repeat)
//! --game GAME       ← game.game override
//! --root DIR        ← game.root override
//! --workshop DIR    ← game.workshop override
//! --dry             ← Log writes instead of performing them
//! --log-level N     ← Console verbosity (0-5)
//! --file-log-level  ← File verbosity (overrides --log-level)
//!
//! Precedence: CLI flags > env > --config > smt.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::steam::Game;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append)]
    pub configs: Vec<PathBuf>,

    /// Game to manage ('ets2' or 'ats'). Without it, an interactive menu asks.
    #[arg(short = 'g', long = "game", value_name = "GAME", value_parser = parse_game)]
    pub game: Option<Game>,

    /// Game install directory (the folder under steamapps/common).
    /// Without it, a folder dialog asks.
    #[arg(short = 'r', long = "root", value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Workshop content folder, used directly instead of deriving it
    /// from --root.
    #[arg(long = "workshop", value_name = "DIR")]
    pub workshop: Option<PathBuf>,

    /// Logs the manifest writes that would happen without touching files.
    #[arg(long)]
    pub dry: bool,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

fn parse_game(s: &str) -> Result<Game, String> {
    s.parse().map_err(|e: crate::error::ConfigError| e.to_string())
}

impl GlobalOptions {
    /// Converts command-line options to configuration overrides, as
    /// `(key, value)` pairs for the loader.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<(String, config::Value)> {
        let mut overrides: Vec<(String, config::Value)> = Vec::new();

        if let Some(game) = self.game {
            overrides.push(("game.game".into(), game.to_string().into()));
        }

        if let Some(ref root) = self.root {
            overrides.push(("game.root".into(), root.display().to_string().into()));
        }

        if let Some(ref workshop) = self.workshop {
            overrides.push(("game.workshop".into(), workshop.display().to_string().into()));
        }

        if self.dry {
            overrides.push(("global.dry".into(), true.into()));
        }

        if let Some(level) = self.log_level {
            overrides.push(("global.output_log_level".into(), i64::from(level).into()));
        }

        // file_log_level falls back to log_level if not specified
        if let Some(level) = self.file_log_level.or(self.log_level) {
            overrides.push(("global.file_log_level".into(), i64::from(level).into()));
        }

        if let Some(ref path) = self.log_file {
            overrides.push(("global.log_file".into(), path.display().to_string().into()));
        }

        overrides
    }
}
