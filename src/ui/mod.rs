// smt-rs: SCS Workshop Mod Toggler
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Interactive selection state machines.
//!
//! ```text
//! GameMenu                     SelectorState
//! Up/Down (wrapping)           Up/Down (clamped, no wrap)
//! Enter -> Game                Space  -> toggle + persist
//! q/Esc -> None                a / d  -> all on / all off
//!                              q/Esc  -> quit
//! ```
//!
//! Both machines are plain data, decoupled from the terminal: `ui::tui`
//! feeds them commands and renders their state. Persistence goes through
//! the [`ManifestStore`] seam so writes can be observed and failed in
//! tests.
//!
//! Invariant: a record's in-memory flag changes only after its store write
//! succeeded. A failed write leaves the record as it was and surfaces the
//! error in the status line.

pub mod tui;


use tracing::{info, warn};

use crate::mods::{ManifestStore, ModRecord};
use crate::steam::Game;

/// Static help line shown above the mod list.
pub const HELP_TEXT: &str =
    "Up/k and Down/j to move, Space to toggle, a = all on, d = all off, q = quit";

/// Mods shipped as `.scs` archives have no manifest to edit.
pub const SCS_ARCHIVE_WARNING: &str = "MODS PACKAGED AS .scs ARE NOT SUPPORTED!";

/// A command dispatched to the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorCommand {
    MoveUp,
    MoveDown,
    Toggle,
    EnableAll,
    DisableAll,
    Quit,
}

/// State machine over the ordered mod list plus a cursor.
#[derive(Debug)]
pub struct SelectorState {
    records: Vec<ModRecord>,
    cursor: usize,
    quit: bool,
    status: Option<String>,
}

impl SelectorState {
    /// Creates a selector over an ordered list of records.
    #[must_use]
    pub fn new(records: Vec<ModRecord>) -> Self {
        Self {
            records,
            cursor: 0,
            quit: false,
            status: None,
        }
    }

    /// Cursor position, always within `[0, len - 1]` for non-empty lists.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the list has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// True once a quit command was applied.
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.quit
    }

    /// Message describing the outcome of the last action, if any.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// The `(enabled, label)` rows a renderer draws, in list order.
    pub fn rows(&self) -> impl Iterator<Item = (bool, &str)> {
        self.records.iter().map(|r| (r.enabled(), r.display_name()))
    }

    /// Count of currently enabled records.
    #[must_use]
    pub fn enabled_count(&self) -> usize {
        self.records.iter().filter(|r| r.enabled()).count()
    }

    /// Applies one command, persisting flag changes through `store`.
    pub fn apply(&mut self, command: SelectorCommand, store: &mut dyn ManifestStore) {
        match command {
            SelectorCommand::MoveUp => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            SelectorCommand::MoveDown => {
                if !self.records.is_empty() {
                    self.cursor = (self.cursor + 1).min(self.records.len() - 1);
                }
            }
            SelectorCommand::Toggle => self.toggle_selected(store),
            SelectorCommand::EnableAll => self.set_all(true, store),
            SelectorCommand::DisableAll => self.set_all(false, store),
            SelectorCommand::Quit => self.quit = true,
        }
    }

    fn toggle_selected(&mut self, store: &mut dyn ManifestStore) {
        let Some(record) = self.records.get_mut(self.cursor) else {
            return;
        };

        let target = !record.enabled();
        match store.set_enabled(record.manifest_path(), target) {
            Ok(()) => {
                record.set_enabled(target);
                let verb = if target { "Enabled" } else { "Disabled" };
                info!(path = %record.manifest_path().display(), enable = target, "toggled mod");
                self.status = Some(format!("{verb} {}", record.display_name()));
            }
            Err(e) => {
                warn!("toggle failed: {e}");
                self.status = Some(format!("Write failed: {e}"));
            }
        }
    }

    fn set_all(&mut self, enable: bool, store: &mut dyn ManifestStore) {
        let mut failures = 0usize;
        for record in &mut self.records {
            match store.set_enabled(record.manifest_path(), enable) {
                Ok(()) => record.set_enabled(enable),
                Err(e) => {
                    warn!("bulk write failed: {e}");
                    failures += 1;
                }
            }
        }

        let verb = if enable { "Enabled" } else { "Disabled" };
        let total = self.records.len();
        self.status = if failures == 0 {
            Some(format!("{verb} all {total} mods"))
        } else {
            Some(format!("{verb} {} of {total} mods ({failures} failed)", total - failures))
        };
    }
}

/// Wrapping menu over the supported games plus a quit entry.
///
/// Unlike the mod selector, the game menu wraps around at both ends.
#[derive(Debug, Default)]
pub struct GameMenu {
    cursor: usize,
}

impl GameMenu {
    /// Menu labels, one per game plus the final quit entry.
    #[must_use]
    pub fn labels() -> Vec<&'static str> {
        let mut labels: Vec<&'static str> = Game::ALL.iter().map(|g| g.title()).collect();
        labels.push("Quit");
        labels
    }

    /// Cursor position within [`Self::labels`].
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Moves the cursor up, wrapping to the bottom.
    pub fn move_up(&mut self) {
        let len = Game::ALL.len() + 1;
        self.cursor = (self.cursor + len - 1) % len;
    }

    /// Moves the cursor down, wrapping to the top.
    pub fn move_down(&mut self) {
        let len = Game::ALL.len() + 1;
        self.cursor = (self.cursor + 1) % len;
    }

    /// The game under the cursor, or `None` on the quit entry.
    #[must_use]
    pub fn selected(&self) -> Option<Game> {
        Game::ALL.get(self.cursor).copied()
    }
}
