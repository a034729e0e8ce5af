// modpack-rs: Modpack release tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Pack source detection.
//!
//! ```text
//! --curseforge-pack-file | ./minecraftinstance.json  --> CurseforgeInstance
//! --packwiz-file         | ./pack.toml               --> Packwiz
//! otherwise                                          --> NoPackDetected
//! ```
//!
//! The first matching rule wins; sources are never merged.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ModpackResult, PackError};

/// Default instance snapshot written by the `CurseForge` launcher.
pub const INSTANCE_FILE: &str = "minecraftinstance.json";

/// Default packwiz manifest.
pub const PACKWIZ_FILE: &str = "pack.toml";

/// Explicit pack file paths, overriding detection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceOverrides {
    pub curseforge_pack_file: Option<PathBuf>,
    pub packwiz_file: Option<PathBuf>,
}

/// The single pack source selected for an invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackSource {
    CurseforgeInstance(PathBuf),
    Packwiz(PathBuf),
}

impl PackSource {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::CurseforgeInstance(path) | Self::Packwiz(path) => path,
        }
    }
}

/// Select the pack source for `dir`.
///
/// Relative override paths are taken relative to `dir`. Whether an override
/// exists is checked by the resolver that opens it.
///
/// # Errors
///
/// Returns [`PackError::NoPackDetected`] if no override is set and neither
/// marker file exists in `dir`.
pub fn detect_source(overrides: &SourceOverrides, dir: &Path) -> ModpackResult<PackSource> {
    let source = if let Some(path) = &overrides.curseforge_pack_file {
        PackSource::CurseforgeInstance(dir.join(path))
    } else if dir.join(INSTANCE_FILE).exists() {
        PackSource::CurseforgeInstance(dir.join(INSTANCE_FILE))
    } else if let Some(path) = &overrides.packwiz_file {
        PackSource::Packwiz(dir.join(path))
    } else if dir.join(PACKWIZ_FILE).exists() {
        PackSource::Packwiz(dir.join(PACKWIZ_FILE))
    } else {
        return Err(PackError::NoPackDetected.into());
    };

    debug!(source = ?source, "detected pack source");
    Ok(source)
}

#[cfg(test)]
mod tests;
