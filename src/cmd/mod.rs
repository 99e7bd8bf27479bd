// smt-rs: SCS Workshop Mod Toggler
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command handlers.
//!
//! ```text
//! resolve_game       config/CLI, else interactive menu
//! resolve_workshop   workshop override, else root (flag/dialog) + derive
//! load_records       discovery + record building
//! ```
//!
//! Every command shares the same resolution pipeline; only what happens
//! with the records differs. The fatal conditions (no folder, missing
//! workshop path, no manifests) surface as [`bail_out`] errors with the
//! user-facing message as the error text.

pub mod interactive;
pub mod list;
pub mod options;
pub mod set;

use std::path::PathBuf;

use tracing::info;

use crate::config::Config;
use crate::error::{Result, bail_out};
use crate::mods::{ModRecord, build_records, discovery::find_manifests};
use crate::steam::{Game, choose_game_root, workshop_content_dir};
use crate::ui::tui::run_game_menu;

/// Picks the game from config/CLI, falling back to the interactive menu.
///
/// `Ok(None)` means the user quit the menu without choosing; callers end
/// the run quietly.
pub(crate) fn resolve_game(config: &Config) -> Result<Option<Game>> {
    if let Some(game) = config.game.game {
        return Ok(Some(game));
    }
    run_game_menu()
}

/// Resolves the workshop content folder for `game`.
///
/// A configured workshop path wins; otherwise the game root (flag, config,
/// or folder dialog) is used to derive `<steamapps>/workshop/content/<app id>`.
///
/// # Errors
///
/// Fails with a user-facing message when no folder is selected, the root is
/// too shallow to contain a steamapps layout, or the workshop path does not
/// exist.
pub(crate) fn resolve_workshop_dir(config: &Config, game: Game) -> Result<PathBuf> {
    info!(game = %game, app_id = game.app_id(), "resolving workshop folder");

    let workshop = if let Some(workshop) = config.game.workshop.clone() {
        workshop
    } else {
        let root = match config.game.root.clone().or_else(|| choose_game_root(game)) {
            Some(root) => root,
            None => return Err(bail_out("No folder selected.").into()),
        };

        match workshop_content_dir(&root, game) {
            Some(workshop) => workshop,
            None => {
                return Err(bail_out(format!(
                    "Cannot locate steamapps above '{}'.",
                    root.display()
                ))
                .into());
            }
        }
    };

    if !workshop.exists() {
        return Err(bail_out(format!(
            "Workshop path not found: {}",
            workshop.display()
        ))
        .into());
    }

    Ok(workshop)
}

/// Discovers manifests under `workshop` and builds their records.
///
/// # Errors
///
/// Fails with a user-facing message when no manifest is found, or none of
/// the found manifests is readable.
pub(crate) fn load_records(workshop: &std::path::Path) -> Result<Vec<ModRecord>> {
    let manifests = find_manifests(workshop);
    if manifests.is_empty() {
        return Err(bail_out("No mods with manifest.sii found.").into());
    }

    let records = build_records(&manifests);
    if records.is_empty() {
        return Err(bail_out("No readable manifest.sii found.").into());
    }

    info!(count = records.len(), "mods discovered");
    Ok(records)
}
