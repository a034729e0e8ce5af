// modpack-rs: Modpack release tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Packwiz pack resolution.
//!
//! ```text
//! pack.toml { version, [index] file }
//!     |
//!     v
//! index.toml [[files]] file = "mods/..."      (other dirs skipped)
//!     |
//!     +-- *.toml --> [update.curseforge]  --> Registry(curseforge, project-id, file-id)
//!     |              [update.modrinth]    --> Registry(modrinth, mod-id, version)
//!     |              [update.github]      --> Github(slug, tag)
//!     |              (none)               --> MissingUpdateInfo
//!     |
//!     +-- other  --> File(basename)
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use super::{parse_toml, read_pack_file, read_referenced_file};
use crate::error::{ModpackResult, PackError};
use crate::model::{ModReference, RegistryKind};

/// Index entries under this prefix are mods; everything else is ignored.
pub const MODS_PREFIX: &str = "mods/";

#[derive(Debug, Deserialize)]
struct PackwizManifest {
    version: Option<String>,
    index: IndexLocation,
}

#[derive(Debug, Deserialize)]
struct IndexLocation {
    file: String,
}

#[derive(Debug, Deserialize)]
struct PackwizIndex {
    #[serde(default)]
    files: Vec<IndexEntry>,
}

#[derive(Debug, Deserialize)]
struct IndexEntry {
    file: String,
}

#[derive(Debug, Deserialize)]
struct ModDefinition {
    name: String,
    update: Option<UpdateTable>,
}

#[derive(Debug, Default, Deserialize)]
struct UpdateTable {
    curseforge: Option<CurseforgeUpdate>,
    modrinth: Option<ModrinthUpdate>,
    github: Option<GithubUpdate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct CurseforgeUpdate {
    project_id: u64,
    file_id: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct ModrinthUpdate {
    mod_id: String,
    version: String,
}

#[derive(Debug, Deserialize)]
struct GithubUpdate {
    slug: String,
    tag: String,
}

/// Where a packwiz mod gets its updates from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateSource {
    Curseforge { project_id: u64, file_id: u64 },
    Modrinth { mod_id: String, version: String },
    Github { slug: String, tag: String },
}

impl UpdateTable {
    /// Picks the block packwiz would use: curseforge, then modrinth, then github.
    fn into_source(self) -> Option<UpdateSource> {
        if let Some(cf) = self.curseforge {
            Some(UpdateSource::Curseforge {
                project_id: cf.project_id,
                file_id: cf.file_id,
            })
        } else if let Some(mr) = self.modrinth {
            Some(UpdateSource::Modrinth {
                mod_id: mr.mod_id,
                version: mr.version,
            })
        } else {
            self.github.map(|gh| UpdateSource::Github {
                slug: gh.slug,
                tag: gh.tag,
            })
        }
    }
}

impl From<UpdateSource> for ModReference {
    fn from(source: UpdateSource) -> Self {
        match source {
            UpdateSource::Curseforge {
                project_id,
                file_id,
            } => Self::registry(
                RegistryKind::Curseforge,
                project_id.to_string(),
                Some(file_id.to_string()),
            ),
            UpdateSource::Modrinth { mod_id, version } => {
                Self::registry(RegistryKind::Modrinth, mod_id, Some(version))
            }
            UpdateSource::Github { slug, tag } => Self::Github { slug, tag },
        }
    }
}

/// Mod references of a packwiz pack, in index order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackwizPack {
    pub version: Option<String>,
    pub references: Vec<ModReference>,
}

/// Parse a packwiz mod definition into its update source.
///
/// # Errors
///
/// Returns [`FsError::NotFound`](crate::error::FsError::NotFound) if the file
/// is missing, [`PackError::Parse`] if it is malformed, or
/// [`PackError::MissingUpdateInfo`] if it has no recognized update block.
pub fn parse_update_source(path: &Path) -> ModpackResult<UpdateSource> {
    let definition: ModDefinition = parse_toml(path, &read_referenced_file(path)?)?;
    debug!(name = %definition.name, path = %path.display(), "parsed mod definition");

    definition
        .update
        .unwrap_or_default()
        .into_source()
        .ok_or_else(|| {
            PackError::MissingUpdateInfo {
                path: path.display().to_string(),
            }
            .into()
        })
}

/// Classify one file listed in the index.
///
/// `.toml` files are mod definitions; anything else is a bare mod file.
///
/// # Errors
///
/// Returns an error if a definition cannot be parsed or lacks update information.
pub fn classify_mod_file(path: &Path) -> ModpackResult<ModReference> {
    if path.extension().is_some_and(|ext| ext == "toml") {
        return parse_update_source(path).map(ModReference::from);
    }

    let file_name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned());
    Ok(ModReference::File { file_name })
}

/// Resolve the packwiz pack described by `manifest_path`.
///
/// # Errors
///
/// Returns [`PackError::PackFileMissing`] if the manifest does not exist,
/// [`FsError::NotFound`](crate::error::FsError::NotFound) if the index does
/// not, [`PackError::Parse`] if any file is malformed, and the errors of
/// [`classify_mod_file`] for individual mods.
pub fn resolve_packwiz(manifest_path: &Path) -> ModpackResult<PackwizPack> {
    let manifest: PackwizManifest = parse_toml(manifest_path, &read_pack_file(manifest_path)?)?;
    let dir = manifest_path.parent().unwrap_or_else(|| Path::new(""));

    let index_path = dir.join(&manifest.index.file);
    let index: PackwizIndex = parse_toml(&index_path, &read_referenced_file(&index_path)?)?;

    let references = index
        .files
        .iter()
        .filter(|entry| entry.file.starts_with(MODS_PREFIX))
        .map(|entry| classify_mod_file(&dir.join(&entry.file)))
        .collect::<ModpackResult<Vec<_>>>()?;

    info!(
        version = manifest.version.as_deref().unwrap_or("-"),
        mods = references.len(),
        "resolved packwiz pack"
    );

    Ok(PackwizPack {
        version: manifest.version,
        references,
    })
}

#[cfg(test)]
mod tests;
