// smt-rs: SCS Workshop Mod Toggler
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Options and configs commands: show what configuration is in effect.

use crate::config::Config;

/// Prints all resolved options, one `key = value` line each.
pub fn run_options_command(config: &Config) {
    for line in config.format_options() {
        println!("{line}");
    }
}

/// Prints the config files that were loaded, in load order.
pub fn run_configs_command(lines: &[String]) {
    if lines.is_empty() {
        println!("No config files loaded");
    } else {
        for line in lines {
            println!("{line}");
        }
    }
}
