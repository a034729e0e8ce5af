// modpack-rs: Modpack release tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use super::{INSTANCE_FILE, PACKWIZ_FILE, PackSource, SourceOverrides, detect_source};
use crate::error::PackError;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn touch(dir: &TempDir, name: &str) {
    std::fs::write(dir.path().join(name), "").expect("failed to write marker");
}

#[test]
fn test_no_markers_fails() {
    let dir = temp_dir();
    let err = detect_source(&SourceOverrides::default(), dir.path()).unwrap_err();
    assert!(matches!(err.as_pack(), Some(PackError::NoPackDetected)));
}

#[test]
fn test_instance_marker_wins_over_packwiz_marker() {
    let dir = temp_dir();
    touch(&dir, INSTANCE_FILE);
    touch(&dir, PACKWIZ_FILE);

    let source = detect_source(&SourceOverrides::default(), dir.path()).unwrap();
    assert_eq!(source, PackSource::CurseforgeInstance(dir.path().join(INSTANCE_FILE)));
}

#[test]
fn test_packwiz_marker() {
    let dir = temp_dir();
    touch(&dir, PACKWIZ_FILE);

    let source = detect_source(&SourceOverrides::default(), dir.path()).unwrap();
    assert_eq!(source, PackSource::Packwiz(dir.path().join(PACKWIZ_FILE)));
}

#[test]
fn test_instance_marker_wins_over_packwiz_override() {
    let dir = temp_dir();
    touch(&dir, INSTANCE_FILE);
    let overrides = SourceOverrides {
        packwiz_file: Some(PathBuf::from("elsewhere/pack.toml")),
        ..Default::default()
    };

    let source = detect_source(&overrides, dir.path()).unwrap();
    assert!(matches!(source, PackSource::CurseforgeInstance(_)));
}

#[test]
fn test_override_is_taken_without_marker() {
    let dir = temp_dir();
    let overrides = SourceOverrides {
        packwiz_file: Some(PathBuf::from("missing/pack.toml")),
        ..Default::default()
    };

    let source = detect_source(&overrides, dir.path()).unwrap();
    assert_eq!(source, PackSource::Packwiz(dir.path().join("missing/pack.toml")));
}

#[test]
fn test_relative_instance_override_resolves_against_dir() {
    let dir = temp_dir();
    let overrides = SourceOverrides {
        curseforge_pack_file: Some(PathBuf::from("instance/snapshot.json")),
        ..Default::default()
    };

    let source = detect_source(&overrides, dir.path()).unwrap();
    assert_eq!(
        source,
        PackSource::CurseforgeInstance(dir.path().join("instance/snapshot.json"))
    );
}

#[test]
fn test_absolute_override_is_kept() {
    let dir = temp_dir();
    let other = temp_dir();
    let absolute = other.path().join("pack.toml");
    let overrides = SourceOverrides {
        packwiz_file: Some(absolute.clone()),
        ..Default::default()
    };

    let source = detect_source(&overrides, dir.path()).unwrap();
    assert_eq!(source, PackSource::Packwiz(absolute));
}
