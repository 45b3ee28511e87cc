//! Integration tests for loading patch options from disk.

use rbxapi_patcher::config::{load_from_path, ConfigError, PatchOptions, ValidationIssue};
use rbxapi_patcher::patch::{Action, PatchReport, Patcher};
use rbxapi_patcher::dump;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_options(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("patch-options.toml");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_options_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write_options(
        &dir,
        r#"
[meta]
name = "nightly"
description = "Apply nightly API diffs"

[report]
record_skipped = true
limit = 100
"#,
    );

    let options = load_from_path(&path).unwrap();
    assert_eq!(options.meta.name, "nightly");
    assert_eq!(
        options.meta.description.as_deref(),
        Some("Apply nightly API diffs")
    );
    assert_eq!(options.report.limit, Some(100));
}

#[test]
fn test_missing_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");
    let error = load_from_path(&path).unwrap_err();
    match &error {
        ConfigError::Io { path: reported, .. } => assert_eq!(reported, &path),
        other => panic!("unexpected error: {other}"),
    }
    assert!(error.to_string().contains("absent.toml"));
}

#[test]
fn test_invalid_toml_carries_path() {
    let dir = TempDir::new().unwrap();
    let path = write_options(&dir, "[report]\nrecord_skipped = \"yes\"\n");
    let error = load_from_path(&path).unwrap_err();
    match error {
        ConfigError::Toml { path: Some(reported), .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_zero_limit_fails_validation() {
    let dir = TempDir::new().unwrap();
    let path = write_options(&dir, "[report]\nrecord_skipped = true\nlimit = 0\n");
    let error = load_from_path(&path).unwrap_err();
    match error {
        ConfigError::Validation {
            path: Some(reported),
            source,
        } => {
            assert_eq!(reported, path);
            assert_eq!(source.issues, vec![ValidationIssue::ZeroLimit]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_loaded_options_drive_report() {
    let dir = TempDir::new().unwrap();
    let path = write_options(&dir, "[report]\nrecord_skipped = true\n");
    let options: PatchOptions = load_from_path(&path).unwrap();

    let mut root = dump::Root::new().with_class(dump::Class::new("Instance", ""));
    let ghost = dump::Class::new("Ghost", "");
    let mut report = PatchReport::from_options(&options);
    root.patch_with(&[Action::remove_class(&ghost)], &mut report);

    assert_eq!(report.skipped().len(), 1);
    assert_eq!(
        report.skipped()[0].to_string(),
        "Remove Class Ghost: class 'Ghost' not found"
    );
}
