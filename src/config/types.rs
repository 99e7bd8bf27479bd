// smt-rs: SCS Workshop Mod Toggler
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for smt-rs.
//!
//! ```text
//! Config: GlobalConfig, GameConfig
//! [global]  dry, log levels, log file
//! [game]    game, root, workshop
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::logging::LogLevel;
use crate::steam::Game;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log the writes that would happen without touching manifests.
    pub dry: bool,
    /// Log level for stdout output (0-5).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-5).
    pub file_log_level: LogLevel,
    /// Path to log file; empty disables the file layer.
    pub log_file: PathBuf,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            dry: false,
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: PathBuf::new(),
        }
    }
}

/// Game selection and path overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Which game to manage; unset means ask interactively.
    pub game: Option<Game>,
    /// Game install directory (`<steamapps>/common/<name>`).
    pub root: Option<PathBuf>,
    /// Workshop content folder, bypassing derivation from `root`.
    pub workshop: Option<PathBuf>,
}
