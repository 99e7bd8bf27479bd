// smt-rs: SCS Workshop Mod Toggler
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Format-preserving editor for `manifest.sii` files.
//!
//! ```text
//! mod_package : .package_name     <- header: "mod_package" + ':'
//! {                               <- nesting +1
//!     display_name: "My Mod"
//!     mp_mod_optional: true       <- the toggled flag
//! }                               <- nesting 0: closing line
//! ```
//!
//! The writer is a per-line state machine (outside / inside the first
//! `mod_package` block); it rewrites or inserts exactly one flag line and
//! emits every other line untouched. Output lines are joined with `\n`,
//! which normalizes any CRLF endings in the input.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Key of the toggled flag, including the trailing colon.
pub const FLAG_KEY: &str = "mp_mod_optional:";

/// Token opening a mod package block.
const BLOCK_TOKEN: &str = "mod_package";

/// The exact text whose presence marks a manifest as enabled.
const ENABLED_LITERAL: &str = "mp_mod_optional: true";

static DISPLAY_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"display_name:\s*"([^"]+)""#).expect("display_name pattern is valid")
});

/// Reports whether a manifest currently has the optional flag enabled.
///
/// This is a substring test over the whole file text, not scoped to the
/// `mod_package` block: the literal `mp_mod_optional: true` anywhere in the
/// file counts as enabled, even though [`set_optional_flag`] only ever
/// writes inside the first block. Files that carry the literal elsewhere
/// misreport until the first write.
#[must_use]
pub fn is_optional_enabled(text: &str) -> bool {
    text.contains(ENABLED_LITERAL)
}

/// Extracts the declared display name, if the manifest has one.
///
/// Matches `display_name: "<text>"` anywhere in the file; absence is not an
/// error (callers fall back to the workshop folder name).
#[must_use]
pub fn display_name(text: &str) -> Option<&str> {
    DISPLAY_NAME_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Scanner state for [`set_optional_flag`].
enum Scan {
    /// Before the first `mod_package` header.
    Outside,
    /// Inside the first block, tracking brace nesting.
    InBlock { depth: i32 },
    /// The first block was closed; later blocks are left untouched.
    Done,
}

/// Returns a copy of `text` with the optional flag inside the first
/// `mod_package` block set to `enable`.
///
/// - An existing `mp_mod_optional:` line inside the block is rewritten in
///   place, keeping its leading indentation.
/// - If the block has no such line, one is inserted immediately before the
///   block's closing brace, indented four spaces deeper than that brace.
/// - Every other line passes through unchanged and in order; lines are
///   joined with `\n`.
/// - Without any `mod_package` block the text comes back unchanged (modulo
///   line-ending normalization).
#[must_use]
pub fn set_optional_flag(text: &str, enable: bool) -> String {
    let value = if enable { "true" } else { "false" };
    let mut out: Vec<Cow<'_, str>> = Vec::new();
    let mut scan = Scan::Outside;
    let mut replaced = false;

    for line in text.lines() {
        let trimmed = line.trim();

        if matches!(scan, Scan::Outside) && is_block_header(trimmed) {
            scan = Scan::InBlock { depth: 0 };
        }

        if let Scan::InBlock { depth } = &mut scan {
            *depth += brace_balance(line);

            if trimmed.contains(FLAG_KEY) {
                out.push(Cow::Owned(format!("{}{FLAG_KEY} {value}", indent_of(line))));
                replaced = true;
                continue;
            }

            if *depth == 0 && trimmed == "}" {
                if !replaced {
                    out.push(Cow::Owned(format!(
                        "{}    {FLAG_KEY} {value}",
                        indent_of(line)
                    )));
                }
                out.push(Cow::Borrowed(line));
                scan = Scan::Done;
                continue;
            }
        }

        out.push(Cow::Borrowed(line));
    }

    out.join("\n")
}

/// A block header is a line starting with the `mod_package` token and
/// containing a colon (`mod_package : .package_name`).
fn is_block_header(trimmed: &str) -> bool {
    trimmed.starts_with(BLOCK_TOKEN) && trimmed.contains(':')
}

/// Net brace nesting change contributed by one line.
fn brace_balance(line: &str) -> i32 {
    let opens = line.matches('{').count();
    let closes = line.matches('}').count();
    opens as i32 - closes as i32
}

/// Leading whitespace of a line.
fn indent_of(line: &str) -> &str {
    &line[..line.len() - line.trim_start().len()]
}

#[cfg(test)]
mod tests;
