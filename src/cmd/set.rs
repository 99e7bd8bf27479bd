// smt-rs: SCS Workshop Mod Toggler
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Batch enable/disable commands.

use tracing::warn;

use crate::cli::SetArgs;
use crate::cmd::{load_records, resolve_game, resolve_workshop_dir};
use crate::config::Config;
use crate::error::Result;
use crate::mods::{FsManifestStore, ManifestStore, ModRecord};

/// Main handler for the enable and disable commands.
///
/// With no IDs every discovered mod is changed; otherwise only mods whose
/// workshop-ID folder matches one of the given IDs. Individual write
/// failures are reported and do not stop the batch.
///
/// # Errors
///
/// Returns an error for the fatal conditions (no folder, missing workshop
/// path, no manifests).
pub fn run_set_command(args: &SetArgs, config: &Config, enable: bool) -> Result<()> {
    let Some(game) = resolve_game(config)? else {
        return Ok(());
    };

    let workshop = resolve_workshop_dir(config, game)?;
    let records = load_records(&workshop)?;

    let selected: Vec<&ModRecord> = if args.ids.is_empty() {
        records.iter().collect()
    } else {
        for id in &args.ids {
            if !records.iter().any(|r| r.workshop_id() == *id) {
                warn!(id = %id, "no mod with this workshop ID");
            }
        }
        records
            .iter()
            .filter(|r| args.ids.iter().any(|id| r.workshop_id() == *id))
            .collect()
    };

    let mut store = FsManifestStore::new(config.global.dry);
    let mut changed = 0usize;
    for record in &selected {
        match store.set_enabled(record.manifest_path(), enable) {
            Ok(()) => changed += 1,
            Err(e) => warn!("{e}"),
        }
    }

    let verb = if enable { "Enabled" } else { "Disabled" };
    println!("{verb} {changed} of {} mods", selected.len());
    Ok(())
}
