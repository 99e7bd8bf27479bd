// smt-rs: SCS Workshop Mod Toggler
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shared utilities.
//!
//! ```text
//! encoding:  decode_sii_bytes()    BOM sniffing, UTF-16 LE fallback
//!            read_sii_file()       bytes from disk → UTF-8 String
//! ```

pub mod encoding;
