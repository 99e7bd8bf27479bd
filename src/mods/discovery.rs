// smt-rs: SCS Workshop Mod Toggler
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Manifest discovery under a workshop content folder.

use ignore::WalkBuilder;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::warn;

/// File name every SCS workshop mod ships its metadata under.
pub const MANIFEST_FILE_NAME: &str = "manifest.sii";

/// Recursively finds every `manifest.sii` beneath `root`, at any depth.
///
/// Traversal is lexically sorted so output order is reproducible. Workshop
/// data is not a source tree, so gitignore/hidden filtering is switched
/// off. A missing root yields an empty list; callers that need to treat
/// that as an error check existence themselves. Unreadable entries are
/// logged and skipped.
#[must_use]
pub fn find_manifests(root: &Path) -> Vec<PathBuf> {
    if !root.exists() {
        return Vec::new();
    }

    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b));

    let mut found = Vec::new();
    for entry in builder.build() {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_some_and(|ft| ft.is_file())
                    && entry.file_name() == OsStr::new(MANIFEST_FILE_NAME)
                {
                    found.push(entry.into_path());
                }
            }
            Err(e) => warn!(error = %e, "workshop walk error"),
        }
    }
    found
}
