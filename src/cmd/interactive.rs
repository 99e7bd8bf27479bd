// smt-rs: SCS Workshop Mod Toggler
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Interactive selector command (the default when no subcommand is given).

use crate::cmd::{load_records, resolve_game, resolve_workshop_dir};
use crate::config::Config;
use crate::error::Result;
use crate::mods::FsManifestStore;
use crate::ui::{SelectorState, tui};

/// Main handler for the interactive run.
///
/// # Errors
///
/// Returns an error for the fatal conditions (no folder, missing workshop
/// path, no manifests) or if the terminal cannot be driven.
pub fn run_interactive_command(config: &Config) -> Result<()> {
    let Some(game) = resolve_game(config)? else {
        return Ok(());
    };

    let workshop = resolve_workshop_dir(config, game)?;
    let records = load_records(&workshop)?;

    let mut state = SelectorState::new(records);
    let mut store = FsManifestStore::new(config.global.dry);
    tui::run_selector(&mut state, &mut store)
}
