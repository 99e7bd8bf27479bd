// smt-rs: SCS Workshop Mod Toggler
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mod records and their persistence.
//!
//! ```text
//! discovery::find_manifests(root)
//!        |
//!        v
//! ModRecord::load(path)      name + flag from manifest text
//!        |
//!        v
//! ManifestStore::set_enabled  read-modify-write through the editor
//! ```
//!
//! A record's `enabled` flag mirrors the on-disk `mp_mod_optional` value;
//! every toggle goes through a [`ManifestStore`] write before the record
//! updates, so memory never runs ahead of disk.

pub mod discovery;

#[cfg(test)]
mod tests;

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::ManifestError;
use crate::manifest;
use crate::utility::encoding::read_sii_file;

/// One Steam Workshop mod, keyed by its manifest path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModRecord {
    manifest_path: PathBuf,
    enabled: bool,
    display_name: String,
}

impl ModRecord {
    /// Loads a record from a manifest file.
    ///
    /// The display name is the manifest's declared `display_name`, falling
    /// back to the workshop-ID folder (the manifest's grandparent), and is
    /// suffixed with the version folder (the parent) in brackets:
    /// `"Heavy Cargo Pack [151]"`.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::ReadFailed`] if the file cannot be read.
    pub fn load(manifest_path: &Path) -> Result<Self, ManifestError> {
        let text = read_sii_file(manifest_path).map_err(|source| ManifestError::ReadFailed {
            path: manifest_path.display().to_string(),
            source,
        })?;

        let version_folder = folder_name(manifest_path.parent());
        let workshop_id_folder = folder_name(manifest_path.parent().and_then(Path::parent));

        let declared = manifest::display_name(&text).map(str::to_owned);
        let display_name = format!(
            "{} [{}]",
            declared.unwrap_or_else(|| workshop_id_folder.clone()),
            version_folder
        );

        Ok(Self {
            manifest_path: manifest_path.to_path_buf(),
            enabled: manifest::is_optional_enabled(&text),
            display_name,
        })
    }

    /// Path of the backing manifest file (the record's identity).
    #[must_use]
    pub fn manifest_path(&self) -> &Path {
        &self.manifest_path
    }

    /// Current enabled state, mirroring the on-disk flag.
    #[must_use]
    pub const fn enabled(&self) -> bool {
        self.enabled
    }

    /// Human-readable label shown in lists.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Workshop-ID folder name (the manifest's grandparent directory).
    #[must_use]
    pub fn workshop_id(&self) -> String {
        folder_name(self.manifest_path.parent().and_then(Path::parent))
    }

    /// Updates the in-memory flag after a successful store write.
    pub(crate) fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

fn folder_name(dir: Option<&Path>) -> String {
    dir.and_then(Path::file_name)
        .map_or_else(|| "?".to_string(), |n| n.to_string_lossy().into_owned())
}

/// Builds records for all discovered manifests.
///
/// A manifest that fails to read is logged and skipped; the scan continues
/// with the rest.
#[must_use]
pub fn build_records(manifests: &[PathBuf]) -> Vec<ModRecord> {
    let mut records = Vec::with_capacity(manifests.len());
    for path in manifests {
        match ModRecord::load(path) {
            Ok(record) => {
                debug!(path = %path.display(), name = %record.display_name(), "loaded mod");
                records.push(record);
            }
            Err(e) => warn!("skipping unreadable manifest: {e}"),
        }
    }
    records
}

/// Persistence seam for the selector and the batch commands.
///
/// The filesystem implementation is [`FsManifestStore`]; tests substitute
/// their own to observe or fail writes.
pub trait ManifestStore {
    /// Sets the optional flag of the manifest at `path`.
    ///
    /// # Errors
    ///
    /// Returns a [`ManifestError`] if the manifest cannot be read or the
    /// rewritten text cannot be written back.
    fn set_enabled(&mut self, path: &Path, enable: bool) -> Result<(), ManifestError>;
}

/// Read-modify-write store over the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsManifestStore {
    dry: bool,
}

impl FsManifestStore {
    /// Creates a store; with `dry` set, writes are logged and skipped.
    #[must_use]
    pub const fn new(dry: bool) -> Self {
        Self { dry }
    }
}

impl ManifestStore for FsManifestStore {
    fn set_enabled(&mut self, path: &Path, enable: bool) -> Result<(), ManifestError> {
        let text = read_sii_file(path).map_err(|source| ManifestError::ReadFailed {
            path: path.display().to_string(),
            source,
        })?;

        let updated = manifest::set_optional_flag(&text, enable);

        if self.dry {
            info!(path = %path.display(), enable, "[DRY-RUN] would write manifest");
            return Ok(());
        }

        std::fs::write(path, updated).map_err(|source| ManifestError::WriteFailed {
            path: path.display().to_string(),
            source,
        })
    }
}
