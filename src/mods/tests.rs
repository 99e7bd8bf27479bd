// smt-rs: SCS Workshop Mod Toggler
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::discovery::find_manifests;
use super::{FsManifestStore, ManifestStore, ModRecord, build_records};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn write_manifest(dir: &Path, body: &str) -> PathBuf {
    std::fs::create_dir_all(dir).unwrap();
    let path = dir.join("manifest.sii");
    std::fs::write(&path, body).unwrap();
    path
}

const NAMED: &str = r#"SiiNunit
{
mod_package : .package_name
{
    display_name: "Acme Mod"
    mp_mod_optional: true
}
}"#;

const NAMELESS: &str = r#"SiiNunit
{
mod_package : .package_name
{
    mp_mod_optional: false
}
}"#;

// --- Record building ---

#[test]
fn test_record_with_declared_name() {
    let temp = temp_dir();
    let path = write_manifest(&temp.path().join("123456789/151"), NAMED);

    let record = ModRecord::load(&path).unwrap();
    assert_eq!(record.display_name(), "Acme Mod [151]");
    assert!(record.enabled());
    assert_eq!(record.workshop_id(), "123456789");
}

#[test]
fn test_record_falls_back_to_workshop_id_folder() {
    let temp = temp_dir();
    let path = write_manifest(&temp.path().join("987654321/151"), NAMELESS);

    let record = ModRecord::load(&path).unwrap();
    assert_eq!(record.display_name(), "987654321 [151]");
    assert!(!record.enabled());
}

#[test]
fn test_record_load_missing_file() {
    let temp = temp_dir();
    let result = ModRecord::load(&temp.path().join("1/2/manifest.sii"));
    assert!(result.is_err());
}

#[test]
fn test_build_records_skips_unreadable() {
    let temp = temp_dir();
    let good = write_manifest(&temp.path().join("111/1"), NAMED);
    let missing = temp.path().join("222/1/manifest.sii");

    let records = build_records(&[good, missing]);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].display_name(), "Acme Mod [1]");
}

// --- Discovery ---

#[test]
fn test_find_manifests_any_depth() {
    let temp = temp_dir();
    write_manifest(temp.path(), NAMED);
    write_manifest(&temp.path().join("a/b"), NAMED);
    write_manifest(&temp.path().join("c/d/e/f"), NAMED);
    std::fs::write(temp.path().join("unrelated.sii"), "x").unwrap();

    let found = find_manifests(temp.path());
    assert_eq!(found.len(), 3);
    assert!(found.iter().all(|p| p.ends_with("manifest.sii")));
}

#[test]
fn test_find_manifests_empty_tree() {
    let temp = temp_dir();
    assert!(find_manifests(temp.path()).is_empty());
}

#[test]
fn test_find_manifests_missing_root() {
    let temp = temp_dir();
    assert!(find_manifests(&temp.path().join("nope")).is_empty());
}

#[test]
fn test_find_manifests_deterministic_order() {
    let temp = temp_dir();
    write_manifest(&temp.path().join("222/1"), NAMED);
    write_manifest(&temp.path().join("111/1"), NAMED);
    write_manifest(&temp.path().join("333/1"), NAMED);

    let first = find_manifests(temp.path());
    let second = find_manifests(temp.path());
    assert_eq!(first, second);
    assert!(first[0].to_string_lossy().contains("111"));
    assert!(first[2].to_string_lossy().contains("333"));
}

// --- Filesystem store ---

#[test]
fn test_fs_store_roundtrip() {
    let temp = temp_dir();
    let path = write_manifest(&temp.path().join("111/1"), NAMELESS);

    let mut store = FsManifestStore::new(false);
    store.set_enabled(&path, true).unwrap();
    assert!(ModRecord::load(&path).unwrap().enabled());

    store.set_enabled(&path, false).unwrap();
    assert!(!ModRecord::load(&path).unwrap().enabled());
}

#[test]
fn test_fs_store_dry_run_leaves_file_alone() {
    let temp = temp_dir();
    let path = write_manifest(&temp.path().join("111/1"), NAMELESS);
    let before = std::fs::read_to_string(&path).unwrap();

    let mut store = FsManifestStore::new(true);
    store.set_enabled(&path, true).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn test_fs_store_missing_file_is_error() {
    let temp = temp_dir();
    let mut store = FsManifestStore::new(false);
    assert!(store.set_enabled(&temp.path().join("nope.sii"), true).is_err());
}
