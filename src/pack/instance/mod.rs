// modpack-rs: Modpack release tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `CurseForge` instance snapshot resolution.
//!
//! ```text
//! minecraftinstance.json
//!   installedAddons[]
//!     | keep addons with a module folder named META-INF (real mod jars)
//!     v
//!   Registry(curseforge, addonID, fileName | displayName,
//!            library = addonID is a dependency of another addon)
//! ```
//!
//! The library hint computed here is only half the decision; the aggregator
//! ANDs it with the registry's own classification.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use super::read_pack_file;
use crate::error::{ModpackResult, PackError};
use crate::model::{ModReference, RegistryKind, RegistryRef};

/// Module folder present in every genuine mod jar.
pub const MOD_MODULE_MARKER: &str = "META-INF";

/// Snapshot of an installed pack, as written by the `CurseForge` launcher.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinecraftInstance {
    #[serde(default)]
    pub name: String,
    pub base_mod_loader: BaseModLoader,
    #[serde(default)]
    pub installed_addons: Vec<InstalledAddon>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseModLoader {
    pub name: String,
    pub minecraft_version: String,
    pub forge_version: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstalledAddon {
    #[serde(rename = "addonID")]
    pub addon_id: u64,
    pub installed_file: InstalledFile,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstalledFile {
    pub id: u64,
    pub file_name: Option<String>,
    pub display_name: Option<String>,
    #[serde(default)]
    pub category_section_package_type: u32,
    #[serde(default)]
    pub dependencies: Vec<AddonDependency>,
    #[serde(default)]
    pub modules: Vec<AddonModule>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddonDependency {
    pub addon_id: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddonModule {
    pub foldername: String,
}

impl InstalledAddon {
    /// Whether the installed file is a mod jar rather than bundled content.
    #[must_use]
    pub fn is_mod(&self) -> bool {
        self.installed_file
            .modules
            .iter()
            .any(|module| module.foldername == MOD_MODULE_MARKER)
    }
}

impl InstalledFile {
    /// Installed file name, falling back to the legacy display name.
    #[must_use]
    pub fn installed_version(&self) -> Option<&str> {
        self.file_name.as_deref().or(self.display_name.as_deref())
    }
}

impl MinecraftInstance {
    /// Ids that some other addon declares as a dependency.
    #[must_use]
    pub fn dependency_targets(&self) -> HashSet<u64> {
        self.installed_addons
            .iter()
            .flat_map(|addon| {
                addon
                    .installed_file
                    .dependencies
                    .iter()
                    .map(|dep| dep.addon_id)
                    .filter(move |id| *id != addon.addon_id)
            })
            .collect()
    }

    /// Registry references for every genuine mod, in snapshot order.
    #[must_use]
    pub fn mod_references(&self) -> Vec<ModReference> {
        let dependency_targets = self.dependency_targets();

        self.installed_addons
            .iter()
            .filter(|addon| addon.is_mod())
            .map(|addon| {
                ModReference::Registry(RegistryRef {
                    registry: RegistryKind::Curseforge,
                    external_id: addon.addon_id.to_string(),
                    installed_version: addon.installed_file.installed_version().map(str::to_string),
                    library: Some(dependency_targets.contains(&addon.addon_id)),
                })
            })
            .collect()
    }
}

/// Read and parse an instance snapshot.
///
/// # Errors
///
/// Returns [`PackError::PackFileMissing`] if the file does not exist and
/// [`PackError::Parse`] if it is not a valid snapshot.
pub fn load_instance(path: &Path) -> ModpackResult<MinecraftInstance> {
    let content = read_pack_file(path)?;
    let instance: MinecraftInstance =
        serde_json::from_str(&content).map_err(|e| PackError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    info!(
        name = %instance.name,
        minecraft = %instance.base_mod_loader.minecraft_version,
        loader = %instance.base_mod_loader.name,
        addons = instance.installed_addons.len(),
        "loaded instance snapshot"
    );
    Ok(instance)
}

/// Resolve the mod references of the snapshot at `path`.
///
/// # Errors
///
/// Returns the errors of [`load_instance`].
pub fn resolve_instance(path: &Path) -> ModpackResult<Vec<ModReference>> {
    load_instance(path).map(|instance| instance.mod_references())
}
