// smt-rs: SCS Workshop Mod Toggler
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tolerant text decoding for `.sii` manifest files.
//!
//! ```text
//! External I/O                 Internal
//! UTF-8 / UTF-8+BOM --(decode)--> UTF-8
//! UTF-16 LE (FF FE) --(decode)--> UTF-8
//! ```
//!
//! SCS manifests are UTF-8 in practice, but files touched by Windows
//! editors sometimes gain a BOM or get re-saved as UTF-16 LE. Decoding is
//! lossy; invalid sequences become U+FFFD. Written files are always UTF-8.

use encoding_rs::UTF_16LE;
use std::borrow::Cow;
use std::path::Path;

/// UTF-8 byte order mark.
const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// UTF-16 LE byte order mark.
const UTF16_LE_BOM: &[u8] = &[0xFF, 0xFE];

/// Decodes raw manifest bytes to UTF-8 text.
///
/// Sniffs a leading BOM: UTF-8 BOMs are stripped, a UTF-16 LE BOM switches
/// to UTF-16 decoding. Everything else is treated as UTF-8 with lossy
/// conversion.
#[must_use]
pub fn decode_sii_bytes(bytes: &[u8]) -> Cow<'_, str> {
    if let Some(rest) = bytes.strip_prefix(UTF8_BOM) {
        return String::from_utf8_lossy(rest);
    }
    if bytes.starts_with(UTF16_LE_BOM) {
        let (result, _had_errors) = UTF_16LE.decode_without_bom_handling(&bytes[2..]);
        return Cow::Owned(result.into_owned());
    }
    String::from_utf8_lossy(bytes)
}

/// Reads a manifest file and decodes it to a UTF-8 string.
///
/// # Errors
///
/// Returns the underlying I/O error if the file cannot be read. Decoding
/// itself never fails; malformed sequences are replaced.
pub fn read_sii_file(path: &Path) -> std::io::Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(decode_sii_bytes(&bytes).into_owned())
}
