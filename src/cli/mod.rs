// smt-rs: SCS Workshop Mod Toggler
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for smt-rs using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! smt [global options] [command]
//! (none)    interactive selector
//! list      print mods and state
//! enable    [IDS...] set flag on
//! disable   [IDS...] set flag off
//! options   dump resolved config
//! configs   list loaded config files
//! version
//! ```

pub mod global;

#[cfg(test)]
mod tests;

use crate::cli::global::GlobalOptions;
use clap::{Args, Parser, Subcommand};

/// SCS Workshop Mod Toggler
///
/// Enables or disables Steam Workshop mods for Euro Truck Simulator 2 and
/// American Truck Simulator by rewriting the `mp_mod_optional` flag in each
/// mod's `manifest.sii`.
#[derive(Debug, Parser)]
#[command(
    name = "smt",
    author,
    version,
    about = "SCS Workshop Mod Toggler",
    long_about = "smt-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Toggles the mp_mod_optional flag in Steam Workshop manifests\n\
                  for ETS2 and ATS. Run `smt` with no command for the interactive\n\
                  arrow-key menu; see `smt <command> --help` for the\n\
                  non-interactive commands.",
    after_help = "CONFIG FILES:\n\n\
                  By default, smt looks for an optional `smt.toml` in the current\n\
                  directory. Additional files can be specified with --config and\n\
                  are loaded on top of it. SMT_* environment variables and CLI\n\
                  flags override both."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute; none means the interactive selector
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values from the config files.
    Options,

    /// Lists the config files used by smt.
    Configs,

    /// Prints discovered mods and their enabled state.
    List,

    /// Enables mods (all of them, or the given workshop IDs).
    Enable(SetArgs),

    /// Disables mods (all of them, or the given workshop IDs).
    Disable(SetArgs),
}

/// Arguments for the batch enable/disable commands.
#[derive(Debug, Clone, Default, Args)]
pub struct SetArgs {
    /// Workshop IDs to change; empty means every discovered mod.
    #[arg(value_name = "IDS")]
    pub ids: Vec<String>,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version
/// information was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
