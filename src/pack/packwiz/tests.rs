// modpack-rs: Modpack release tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::collections::HashSet;
use std::path::Path;

use super::{UpdateSource, classify_mod_file, parse_update_source, resolve_packwiz};
use crate::error::{FsError, PackError};
use crate::model::{ModReference, ReferenceGroup, RegistryKind};
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn write(dir: &Path, rel: &str, content: &str) {
    let path = dir.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("failed to create dirs");
    }
    std::fs::write(path, content).expect("failed to write file");
}

fn write_pack(dir: &Path, files: &[&str]) {
    write(
        dir,
        "pack.toml",
        "name = \"Test\"\nversion = \"1.2.0\"\n\n[index]\nfile = \"index.toml\"\nhash-format = \"sha256\"\n",
    );
    let index: String = files
        .iter()
        .map(|f| format!("[[files]]\nfile = \"{f}\"\nhash = \"00\"\n\n"))
        .collect();
    write(dir, "index.toml", &format!("hash-format = \"sha256\"\n\n{index}"));
}

const CURSEFORGE_DEF: &str = r#"
name = "Just Enough Items"
filename = "jei.jar"

[update.curseforge]
project-id = 10
file-id = 20
"#;

#[test]
fn test_definition_and_bare_file() {
    let dir = temp_dir();
    write_pack(dir.path(), &["mods/a.toml", "mods/b.jar"]);
    write(dir.path(), "mods/a.toml", CURSEFORGE_DEF);

    let pack = resolve_packwiz(&dir.path().join("pack.toml")).unwrap();

    assert_eq!(pack.version.as_deref(), Some("1.2.0"));
    assert_eq!(
        pack.references,
        vec![
            ModReference::registry(RegistryKind::Curseforge, "10", Some("20".to_string())),
            ModReference::File {
                file_name: "b.jar".to_string()
            },
        ]
    );
}

#[test]
fn test_entries_outside_mods_are_skipped() {
    let dir = temp_dir();
    write_pack(
        dir.path(),
        &["config/jei.toml", "resourcepacks/faithful.zip", "mods/b.jar"],
    );

    let pack = resolve_packwiz(&dir.path().join("pack.toml")).unwrap();
    assert_eq!(pack.references.len(), 1);
}

#[test]
fn test_update_block_priority() {
    let dir = temp_dir();
    write(
        dir.path(),
        "all.toml",
        r#"
name = "All"

[update.github]
slug = "owner/repo"
tag = "v1"

[update.modrinth]
mod-id = "AANobbMI"
version = "abc"

[update.curseforge]
project-id = 1
file-id = 2
"#,
    );
    write(
        dir.path(),
        "mr.toml",
        r#"
name = "Sodium"

[update.github]
slug = "owner/repo"
tag = "v1"

[update.modrinth]
mod-id = "AANobbMI"
version = "abc"
"#,
    );
    write(
        dir.path(),
        "gh.toml",
        "name = \"Gh\"\n\n[update.github]\nslug = \"owner/repo\"\ntag = \"v1\"\n",
    );

    let cases = [
        (
            "all.toml",
            UpdateSource::Curseforge {
                project_id: 1,
                file_id: 2,
            },
        ),
        (
            "mr.toml",
            UpdateSource::Modrinth {
                mod_id: "AANobbMI".to_string(),
                version: "abc".to_string(),
            },
        ),
        (
            "gh.toml",
            UpdateSource::Github {
                slug: "owner/repo".to_string(),
                tag: "v1".to_string(),
            },
        ),
    ];

    for (file, expected) in cases {
        assert_eq!(parse_update_source(&dir.path().join(file)).unwrap(), expected, "{file}");
    }
}

#[test]
fn test_definition_without_update_block() {
    let dir = temp_dir();
    write(dir.path(), "mods/plain.toml", "name = \"Plain\"\n");

    let err = classify_mod_file(&dir.path().join("mods/plain.toml")).unwrap_err();
    assert!(matches!(err.as_pack(), Some(PackError::MissingUpdateInfo { .. })));
}

#[test]
fn test_non_toml_is_bare_file() {
    let reference = classify_mod_file(Path::new("mods/plain.jar")).unwrap();
    assert_eq!(
        reference,
        ModReference::File {
            file_name: "plain.jar".to_string()
        }
    );
}

#[test]
fn test_missing_manifest() {
    let dir = temp_dir();
    let err = resolve_packwiz(&dir.path().join("pack.toml")).unwrap_err();
    assert!(matches!(err.as_pack(), Some(PackError::PackFileMissing { .. })));
}

#[test]
fn test_missing_index_is_not_a_missing_pack_file() {
    let dir = temp_dir();
    write_pack(dir.path(), &[]);
    std::fs::remove_file(dir.path().join("index.toml")).expect("failed to remove index");

    let err = resolve_packwiz(&dir.path().join("pack.toml")).unwrap_err();
    assert!(err.as_pack().is_none(), "{err}");
    match err.as_fs() {
        Some(FsError::NotFound(path)) => assert!(path.ends_with("index.toml"), "{path}"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn test_missing_definition_is_not_a_missing_pack_file() {
    let dir = temp_dir();
    write_pack(dir.path(), &["mods/gone.toml"]);

    let err = resolve_packwiz(&dir.path().join("pack.toml")).unwrap_err();
    assert!(matches!(err.as_fs(), Some(FsError::NotFound(_))), "{err}");
}

#[test]
fn test_malformed_definition() {
    let dir = temp_dir();
    write_pack(dir.path(), &["mods/bad.toml"]);
    write(dir.path(), "mods/bad.toml", "name = \n");

    let err = resolve_packwiz(&dir.path().join("pack.toml")).unwrap_err();
    assert!(matches!(err.as_pack(), Some(PackError::Parse { .. })));
}

#[test]
fn test_references_partition_into_groups() {
    let dir = temp_dir();
    write_pack(
        dir.path(),
        &["mods/a.toml", "mods/b.jar", "mods/c.toml", "mods/d.toml", "mods/e.jar"],
    );
    write(dir.path(), "mods/a.toml", CURSEFORGE_DEF);
    write(
        dir.path(),
        "mods/c.toml",
        "name = \"C\"\n\n[update.modrinth]\nmod-id = \"c\"\nversion = \"1\"\n",
    );
    write(
        dir.path(),
        "mods/d.toml",
        "name = \"D\"\n\n[update.github]\nslug = \"o/d\"\ntag = \"v2\"\n",
    );

    let pack = resolve_packwiz(&dir.path().join("pack.toml")).unwrap();

    let mut total = 0;
    let mut seen = HashSet::new();
    for group in ReferenceGroup::ALL {
        let members: Vec<_> = pack
            .references
            .iter()
            .enumerate()
            .filter(|(_, r)| r.group() == group)
            .map(|(i, _)| i)
            .collect();
        total += members.len();
        seen.extend(members);
    }

    assert_eq!(total, pack.references.len());
    assert_eq!(seen.len(), 5);
}
