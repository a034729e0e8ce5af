// modpack-rs: Modpack release tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for modpack-rs.
//!
//! # Config Structure
//!
//! ```text
//! Config
//!   global    log levels, log file
//!   registry  curseforge { token, api_url }
//!             modrinth   { token, api_url, user_agent }
//!   pack      curseforge_pack_file, packwiz_file, mods_dir
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::logging::LogLevel;
use crate::registry::{curseforge, modrinth};

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for console output (0-6).
    pub log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file; no file log when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// Registry client settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
    pub curseforge: CurseforgeConfig,
    pub modrinth: ModrinthConfig,
}

/// `CurseForge` API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CurseforgeConfig {
    /// API key sent as `x-api-key`. Required only for packs with `CurseForge` mods.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub token: String,
    pub api_url: String,
}

impl Default for CurseforgeConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            api_url: curseforge::DEFAULT_API_URL.to_string(),
        }
    }
}

/// Modrinth API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModrinthConfig {
    /// Optional token sent as `Authorization`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub token: String,
    pub api_url: String,
    /// Modrinth rejects requests without an identifying user agent.
    pub user_agent: String,
}

impl Default for ModrinthConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            api_url: modrinth::DEFAULT_API_URL.to_string(),
            user_agent: concat!("modpack-rs/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Pack location settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PackConfig {
    /// Explicit instance snapshot, bypassing detection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curseforge_pack_file: Option<PathBuf>,
    /// Explicit packwiz manifest, bypassing detection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packwiz_file: Option<PathBuf>,
    /// Directory holding installed mod jars (manifest generation).
    pub mods_dir: PathBuf,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            curseforge_pack_file: None,
            packwiz_file: None,
            mods_dir: PathBuf::from("mods"),
        }
    }
}
