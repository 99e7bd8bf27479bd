// smt-rs: SCS Workshop Mod Toggler
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Steam games and workshop path resolution.
//!
//! ```text
//! <steamapps>/common/<Game dir>            <- what the user points at
//! <steamapps>/workshop/content/<app id>    <- where the mods live
//!           /<workshop id>/<version>/manifest.sii
//! ```

use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::ConfigError;

/// A supported SCS truck simulator, carrying its Steam app ID.
///
/// The chosen game is threaded through path resolution explicitly; there is
/// no process-wide "current game".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Game {
    /// Euro Truck Simulator 2.
    Ets2,
    /// American Truck Simulator.
    Ats,
}

impl Game {
    /// All supported games, in menu order.
    pub const ALL: [Self; 2] = [Self::Ets2, Self::Ats];

    /// Steam application ID, the key of the workshop content folder.
    #[must_use]
    pub const fn app_id(self) -> u32 {
        match self {
            Self::Ets2 => 227_300,
            Self::Ats => 270_880,
        }
    }

    /// Full game title for menus and messages.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Ets2 => "Euro Truck Simulator 2 (ETS2)",
            Self::Ats => "American Truck Simulator (ATS)",
        }
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ets2 => write!(f, "ets2"),
            Self::Ats => write!(f, "ats"),
        }
    }
}

impl std::str::FromStr for Game {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ets2" => Ok(Self::Ets2),
            "ats" => Ok(Self::Ats),
            _ => Err(ConfigError::InvalidValue {
                section: "game".to_string(),
                key: "game".to_string(),
                message: format!("expected 'ets2' or 'ats', got '{s}'"),
            }),
        }
    }
}

/// Derives the workshop content folder from a game install directory.
///
/// The install dir sits at `<steamapps>/common/<name>`, so two parents up
/// is `steamapps`; returns `None` when the given path is too shallow for
/// that layout.
#[must_use]
pub fn workshop_content_dir(game_root: &Path, game: Game) -> Option<PathBuf> {
    let steamapps = game_root.parent()?.parent()?;
    Some(
        steamapps
            .join("workshop")
            .join("content")
            .join(game.app_id().to_string()),
    )
}

/// Asks the user for the game install directory.
///
/// Tries the native folder dialog first; if it is unavailable or dismissed,
/// falls back to a plain path prompt on stdin. Returns `None` when the user
/// provides nothing — the caller treats that as the fatal "no folder
/// selected" condition.
#[must_use]
pub fn choose_game_root(game: Game) -> Option<PathBuf> {
    let title = format!("Select your {} directory", game.title());
    let picked = rfd::FileDialog::new().set_title(&title).pick_folder();

    if let Some(folder) = picked {
        debug!(path = %folder.display(), "folder picked via dialog");
        return Some(folder);
    }

    println!("No folder selected via dialog. Paste the game path manually.");
    print!("Path: ");
    let _ = std::io::stdout().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_err() {
        return None;
    }
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(PathBuf::from(trimmed))
}
