// smt-rs: SCS Workshop Mod Toggler
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! List command implementation for smt-rs.

use crate::cmd::{load_records, resolve_game, resolve_workshop_dir};
use crate::config::Config;
use crate::error::Result;

/// Main handler for list command.
///
/// Prints one line per discovered mod: checked state, label, and the
/// workshop ID accepted by `enable`/`disable`.
///
/// # Errors
///
/// Returns an error for the fatal conditions (no folder, missing workshop
/// path, no manifests).
pub fn run_list_command(config: &Config) -> Result<()> {
    let Some(game) = resolve_game(config)? else {
        return Ok(());
    };

    let workshop = resolve_workshop_dir(config, game)?;
    let records = load_records(&workshop)?;

    for record in &records {
        let mark = if record.enabled() { "[x]" } else { "[ ]" };
        println!("{mark} {}  ({})", record.display_name(), record.workshop_id());
    }
    Ok(())
}
