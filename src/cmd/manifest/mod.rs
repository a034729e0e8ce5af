// modpack-rs: Modpack release tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `CurseForge` manifest generation.
//!
//! ```text
//! minecraftinstance.json + mods/
//!     |
//!     | addons with categorySectionPackageType != 3 (not a resource pack)
//!     | whose installed file is present in mods/
//!     v
//! manifest.json { minecraft, files[{projectID, fileID, required}], ... }
//! ```

use std::path::Path;

use anyhow::Context;
use serde::Serialize;
use tracing::info;

use crate::cli::manifest::ManifestArgs;
use crate::config::Config;
use crate::error::{FsError, Result};
use crate::pack::detect::INSTANCE_FILE;
use crate::pack::instance::{MinecraftInstance, load_instance};

/// `categorySectionPackageType` of resource packs, which live outside `mods/`.
pub const RESOURCE_PACK_PACKAGE_TYPE: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurseforgeManifest {
    pub minecraft: ManifestMinecraft,
    pub files: Vec<ManifestFile>,
    pub manifest_type: String,
    pub manifest_version: u32,
    pub name: String,
    pub version: String,
    pub author: String,
    pub overrides: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestMinecraft {
    pub version: String,
    pub mod_loaders: Vec<ManifestModLoader>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestModLoader {
    pub id: String,
    pub primary: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestFile {
    #[serde(rename = "projectID")]
    pub project_id: u64,
    #[serde(rename = "fileID")]
    pub file_id: u64,
    pub required: bool,
}

/// Release details not contained in the instance snapshot.
#[derive(Debug, Clone, Default)]
pub struct ReleaseInfo {
    pub version: String,
    pub author: String,
    /// Overrides the instance name.
    pub name: Option<String>,
}

/// Build the manifest for `instance`, listing only mods present in `mods_dir`.
#[must_use]
pub fn build_manifest(instance: &MinecraftInstance, mods_dir: &Path, release: &ReleaseInfo) -> CurseforgeManifest {
    let files = instance
        .installed_addons
        .iter()
        .filter(|addon| addon.installed_file.category_section_package_type != RESOURCE_PACK_PACKAGE_TYPE)
        .filter(|addon| {
            addon
                .installed_file
                .file_name
                .as_deref()
                .is_some_and(|name| mods_dir.join(name).is_file())
        })
        .map(|addon| ManifestFile {
            project_id: addon.addon_id,
            file_id: addon.installed_file.id,
            required: true,
        })
        .collect();

    CurseforgeManifest {
        minecraft: ManifestMinecraft {
            version: instance.base_mod_loader.minecraft_version.clone(),
            mod_loaders: vec![ManifestModLoader {
                id: instance.base_mod_loader.name.clone(),
                primary: true,
            }],
        },
        files,
        manifest_type: "minecraftModpack".to_string(),
        manifest_version: 1,
        name: release.name.clone().unwrap_or_else(|| instance.name.clone()),
        version: release.version.clone(),
        author: release.author.clone(),
        overrides: "overrides".to_string(),
    }
}

/// Main handler for the manifest command.
///
/// Relative paths are resolved against `dir`.
///
/// # Errors
///
/// Returns an error if the snapshot cannot be loaded, the mods directory does
/// not exist, or the manifest cannot be written.
pub fn run_manifest_command(args: &ManifestArgs, config: &Config, dir: &Path) -> Result<()> {
    let snapshot = args
        .curseforge_pack_file
        .clone()
        .or_else(|| config.pack.curseforge_pack_file.clone())
        .unwrap_or_else(|| INSTANCE_FILE.into());
    let instance = load_instance(&dir.join(snapshot)).context("failed to load instance snapshot")?;

    let mods_dir = dir.join(&config.pack.mods_dir);
    if !mods_dir.is_dir() {
        return Err(FsError::NotFound(mods_dir.display().to_string()).into());
    }

    let release = ReleaseInfo {
        version: args.version.clone(),
        author: args.author.clone(),
        name: args.name.clone(),
    };
    let manifest = build_manifest(&instance, &mods_dir, &release);
    info!(files = manifest.files.len(), "found installed mods");

    let output = dir.join(&args.output);
    let json = serde_json::to_string_pretty(&manifest)?;
    std::fs::write(&output, json)
        .with_context(|| format!("failed to write {}", output.display()))?;

    info!(path = %output.display(), version = %manifest.version, "wrote manifest");
    Ok(())
}

#[cfg(test)]
mod tests;
