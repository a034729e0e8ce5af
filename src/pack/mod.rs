// modpack-rs: Modpack release tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Pack import pipeline.
//!
//! ```text
//! detect_source ----> PackSource
//!                       |
//!          +------------+-------------+
//!          v                          v
//!   resolve_instance            resolve_packwiz
//!   (minecraftinstance.json)    (pack.toml + index + mods/*.toml)
//!          |                          |
//!          +-------> Vec<ModReference> <----+
//!                          |
//!                          v
//!                     Aggregator ---> ImportedPack
//! ```

pub mod aggregate;
pub mod detect;
pub mod instance;
pub mod packwiz;

use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::info;

pub use aggregate::{Aggregator, ProgressCallback, ProgressEvent};
pub use detect::{PackSource, SourceOverrides, detect_source};

use crate::error::{FsError, ModpackResult, PackError};
use crate::model::ImportedPack;

/// Read the entry file of a pack (instance snapshot or packwiz manifest).
///
/// # Errors
///
/// Returns [`PackError::PackFileMissing`] if `path` does not exist and
/// [`FsError::IoError`] if it cannot be read.
pub fn read_pack_file(path: &Path) -> ModpackResult<String> {
    if !path.exists() {
        return Err(PackError::PackFileMissing {
            path: path.display().to_string(),
        }
        .into());
    }
    read_file(path)
}

/// Read a file referenced from within a pack (index or mod definition).
///
/// # Errors
///
/// Returns [`FsError::NotFound`] if `path` does not exist and
/// [`FsError::IoError`] if it cannot be read.
pub fn read_referenced_file(path: &Path) -> ModpackResult<String> {
    if !path.exists() {
        return Err(FsError::NotFound(path.display().to_string()).into());
    }
    read_file(path)
}

fn read_file(path: &Path) -> ModpackResult<String> {
    std::fs::read_to_string(path).map_err(|source| {
        FsError::IoError {
            path: path.display().to_string(),
            source,
        }
        .into()
    })
}

/// Deserialize TOML `content` read from `path`.
///
/// # Errors
///
/// Returns [`PackError::Parse`] if the content does not match `T`.
pub fn parse_toml<T: DeserializeOwned>(path: &Path, content: &str) -> ModpackResult<T> {
    toml::from_str(content).map_err(|e| {
        PackError::Parse {
            path: path.display().to_string(),
            message: e.message().to_string(),
        }
        .into()
    })
}

/// Detect, resolve and aggregate the pack in `dir`.
///
/// # Errors
///
/// Returns the first detection, resolution or registry error encountered.
pub async fn import_pack(
    overrides: &SourceOverrides,
    dir: &Path,
    aggregator: &Aggregator,
) -> ModpackResult<ImportedPack> {
    let source = detect_source(overrides, dir)?;
    info!(path = %source.path().display(), "importing pack");

    let (references, version) = match &source {
        PackSource::CurseforgeInstance(path) => (instance::resolve_instance(path)?, None),
        PackSource::Packwiz(path) => {
            let pack = packwiz::resolve_packwiz(path)?;
            (pack.references, pack.version)
        }
    };

    let mods = aggregator.aggregate(&references).await?;
    Ok(ImportedPack { mods, version })
}
