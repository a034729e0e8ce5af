// modpack-rs: Modpack release tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;

use super::{ReleaseInfo, build_manifest, run_manifest_command};
use crate::cli::manifest::ManifestArgs;
use crate::config::Config;
use crate::pack::instance::MinecraftInstance;
use serde_json::json;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn snapshot() -> serde_json::Value {
    let addon = |id: u64, file: &str, package_type: u32| {
        json!({
            "addonID": id,
            "installedFile": {
                "id": id + 1000,
                "fileName": file,
                "categorySectionPackageType": package_type,
                "modules": [{ "foldername": "META-INF" }],
            },
        })
    };
    json!({
        "name": "Snapshot Name",
        "baseModLoader": { "name": "forge-47.2.0", "minecraftVersion": "1.20.1" },
        "installedAddons": [
            addon(1, "present.jar", 6),
            addon(2, "missing.jar", 6),
            addon(3, "textures.zip", 3),
        ],
    })
}

fn write_mods(dir: &Path, files: &[&str]) {
    let mods = dir.join("mods");
    std::fs::create_dir_all(&mods).unwrap();
    for file in files {
        std::fs::write(mods.join(file), "").unwrap();
    }
}

#[test]
fn test_build_manifest_filters_files() {
    let dir = temp_dir();
    // The resource pack is present on disk but still excluded by its package type.
    write_mods(dir.path(), &["present.jar", "textures.zip"]);
    let instance: MinecraftInstance = serde_json::from_value(snapshot()).unwrap();

    let release = ReleaseInfo {
        version: "1.4.0".to_string(),
        author: "someone".to_string(),
        name: None,
    };
    let manifest = build_manifest(&instance, &dir.path().join("mods"), &release);

    insta::assert_snapshot!(serde_json::to_string(&manifest).unwrap(), @r#"{"minecraft":{"version":"1.20.1","modLoaders":[{"id":"forge-47.2.0","primary":true}]},"files":[{"projectID":1,"fileID":1001,"required":true}],"manifestType":"minecraftModpack","manifestVersion":1,"name":"Snapshot Name","version":"1.4.0","author":"someone","overrides":"overrides"}"#);
}

#[test]
fn test_name_override() {
    let dir = temp_dir();
    let instance: MinecraftInstance = serde_json::from_value(snapshot()).unwrap();
    let release = ReleaseInfo {
        name: Some("Release Name".to_string()),
        ..Default::default()
    };

    let manifest = build_manifest(&instance, dir.path(), &release);
    assert_eq!(manifest.name, "Release Name");
    assert!(manifest.files.is_empty());
}

#[test]
fn test_run_manifest_command_writes_file() {
    let dir = temp_dir();
    write_mods(dir.path(), &["present.jar", "missing-not.jar"]);
    std::fs::write(dir.path().join("minecraftinstance.json"), snapshot().to_string()).unwrap();

    let args = ManifestArgs {
        version: "2.0.0".to_string(),
        author: String::new(),
        name: None,
        curseforge_pack_file: None,
        output: "out/manifest.json".into(),
    };
    std::fs::create_dir_all(dir.path().join("out")).unwrap();

    run_manifest_command(&args, &Config::default(), dir.path()).unwrap();

    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join("out/manifest.json")).unwrap()).unwrap();
    assert_eq!(written["version"], "2.0.0");
    assert_eq!(written["files"].as_array().map(Vec::len), Some(1));
}

#[test]
fn test_run_manifest_command_without_mods_dir() {
    let dir = temp_dir();
    std::fs::write(dir.path().join("minecraftinstance.json"), snapshot().to_string()).unwrap();

    let args = ManifestArgs {
        version: "2.0.0".to_string(),
        author: String::new(),
        name: None,
        curseforge_pack_file: None,
        output: "manifest.json".into(),
    };

    let err = run_manifest_command(&args, &Config::default(), dir.path()).unwrap_err();
    assert!(err.to_string().contains("path not found"), "{err}");
}
