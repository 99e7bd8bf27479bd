// smt-rs: SCS Workshop Mod Toggler
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{display_name, is_optional_enabled, set_optional_flag};

const MANIFEST: &str = r#"SiiNunit
{
mod_package : .package_name
{
    package_version: "1.0"
    display_name: "Heavy Cargo Pack"
    mp_mod_optional: false
    icon: "icon.jpg"
}
}"#;

const MANIFEST_WITHOUT_FLAG: &str = r#"SiiNunit
{
mod_package : .package_name
{
    package_version: "1.0"
    display_name: "Heavy Cargo Pack"
}
}"#;

#[test]
fn test_enable_rewrites_flag_line() {
    let out = set_optional_flag(MANIFEST, true);
    insta::assert_snapshot!(out, @r#"
    SiiNunit
    {
    mod_package : .package_name
    {
        package_version: "1.0"
        display_name: "Heavy Cargo Pack"
        mp_mod_optional: true
        icon: "icon.jpg"
    }
    }
    "#);
}

#[test]
fn test_roundtrip_enable_then_read() {
    let enabled = set_optional_flag(MANIFEST, true);
    assert!(is_optional_enabled(&enabled));

    let disabled = set_optional_flag(&enabled, false);
    assert!(!is_optional_enabled(&disabled));
}

#[test]
fn test_write_is_idempotent() {
    let once = set_optional_flag(MANIFEST, true);
    let twice = set_optional_flag(&once, true);
    assert_eq!(once, twice);
}

#[test]
fn test_insertion_before_closing_brace() {
    let out = set_optional_flag(MANIFEST_WITHOUT_FLAG, true);
    insta::assert_snapshot!(out, @r#"
    SiiNunit
    {
    mod_package : .package_name
    {
        package_version: "1.0"
        display_name: "Heavy Cargo Pack"
        mp_mod_optional: true
    }
    }
    "#);
    // Inserted exactly once
    assert_eq!(out.matches("mp_mod_optional:").count(), 1);
}

#[test]
fn test_insertion_indent_follows_closing_brace() {
    let text = "mod_package : .p\n\t{\n\t\tfoo: 1\n\t}\n";
    let out = set_optional_flag(text, false);
    // Four spaces deeper than the closing line's own indentation.
    assert_eq!(out, "mod_package : .p\n\t{\n\t\tfoo: 1\n\t    mp_mod_optional: false\n\t}");
}

#[test]
fn test_only_first_block_is_modified() {
    let text = r#"mod_package : .first
{
    mp_mod_optional: false
}
mod_package : .second
{
    mp_mod_optional: false
}"#;
    let out = set_optional_flag(text, true);
    insta::assert_snapshot!(out, @r"
    mod_package : .first
    {
        mp_mod_optional: true
    }
    mod_package : .second
    {
        mp_mod_optional: false
    }
    ");
}

#[test]
fn test_no_block_returns_text_unchanged() {
    let text = "SiiNunit\n{\n}\n";
    assert_eq!(set_optional_flag(text, true), "SiiNunit\n{\n}");
}

#[test]
fn test_header_with_brace_on_same_line() {
    let text = "mod_package : .p {\n    mp_mod_optional: false\n}\n";
    let out = set_optional_flag(text, true);
    assert_eq!(out, "mod_package : .p {\n    mp_mod_optional: true\n}");
}

#[test]
fn test_crlf_input_is_normalized() {
    let text = "mod_package : .p\r\n{\r\n    mp_mod_optional: false\r\n}\r\n";
    let out = set_optional_flag(text, true);
    assert_eq!(out, "mod_package : .p\n{\n    mp_mod_optional: true\n}");
}

#[test]
fn test_unrelated_lines_preserved_byte_for_byte() {
    let weird = "SiiNunit\n{\nmod_package : .p\n{\n   odd_indent:\t\"x\"  \n    mp_mod_optional: false\n}\n}";
    let out = set_optional_flag(weird, true);
    assert!(out.contains("   odd_indent:\t\"x\"  "));
}

#[test]
fn test_read_is_unscoped_substring() {
    // The literal outside any mod_package block still reads as enabled.
    let text = "# mp_mod_optional: true\nmod_package : .p\n{\n    mp_mod_optional: false\n}";
    assert!(is_optional_enabled(text));
}

#[test]
fn test_display_name_extraction() {
    assert_eq!(display_name(MANIFEST), Some("Heavy Cargo Pack"));
    assert_eq!(display_name("mp_mod_optional: true"), None);
}

#[test]
fn test_display_name_with_spacing_variants() {
    assert_eq!(display_name("display_name:\"Tight\""), Some("Tight"));
    assert_eq!(display_name("display_name:   \"Spaced Out\""), Some("Spaced Out"));
}
