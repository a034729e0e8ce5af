// modpack-rs: Modpack release tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for modpack-rs.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. modpack.toml (cwd, optional)
//! 3. --config FILE (repeatable)
//! 4. MODPACK_* env vars
//! 5. --set key=value
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! MODPACK_GLOBAL__LOG_LEVEL=4               → global.log_level = 4
//! MODPACK_REGISTRY__CURSEFORGE__TOKEN=...   → registry.curseforge.token
//! MODPACK_PACK__MODS_DIR=instance/mods      → pack.mods_dir
//! ```
//!
//! Nesting uses `__` because keys themselves contain `_`.

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::pack::SourceOverrides;

use loader::ConfigLoader;
use types::{GlobalConfig, PackConfig, RegistryConfig};

/// Default configuration file, looked up in the working directory.
pub const CONFIG_FILE: &str = "modpack.toml";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "MODPACK";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Registry clients.
    pub registry: RegistryConfig,
    /// Pack locations.
    pub pack: PackConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use modpack_rs::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("modpack.toml")
    ///     .with_env_prefix("MODPACK")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Check values that deserialize fine but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an API URL that does not parse
    /// and [`ConfigError::MissingKey`] for an empty Modrinth user agent.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        for (section, url) in [
            ("registry.curseforge", &self.registry.curseforge.api_url),
            ("registry.modrinth", &self.registry.modrinth.api_url),
        ] {
            reqwest::Url::parse(url).map_err(|e| ConfigError::InvalidValue {
                section: section.to_string(),
                key: "api_url".to_string(),
                message: format!("'{url}': {e}"),
            })?;
        }

        if self.registry.modrinth.user_agent.trim().is_empty() {
            return Err(ConfigError::MissingKey {
                section: "registry.modrinth".to_string(),
                key: "user_agent".to_string(),
            });
        }
        Ok(())
    }

    /// Pack file overrides taken from `[pack]`.
    #[must_use]
    pub fn source_overrides(&self) -> SourceOverrides {
        SourceOverrides {
            curseforge_pack_file: self.pack.curseforge_pack_file.clone(),
            packwiz_file: self.pack.packwiz_file.clone(),
        }
    }

    /// Format configuration options for display.
    ///
    /// Tokens are shown as `[hidden]`. Output is sorted by key.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_registry_options(&mut options);
        self.format_pack_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "global.log_level".into(),
            self.global.log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert("global.log_file".into(), fmt_path(self.global.log_file.as_ref()));
    }

    fn format_registry_options(&self, options: &mut BTreeMap<String, String>) {
        let hidden = |token: &str| {
            if token.is_empty() {
                String::new()
            } else {
                "[hidden]".to_string()
            }
        };

        let curseforge = &self.registry.curseforge;
        options.insert("registry.curseforge.token".into(), hidden(&curseforge.token));
        options.insert("registry.curseforge.api_url".into(), curseforge.api_url.clone());

        let modrinth = &self.registry.modrinth;
        options.insert("registry.modrinth.token".into(), hidden(&modrinth.token));
        options.insert("registry.modrinth.api_url".into(), modrinth.api_url.clone());
        options.insert("registry.modrinth.user_agent".into(), modrinth.user_agent.clone());
    }

    fn format_pack_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "pack.curseforge_pack_file".into(),
            fmt_path(self.pack.curseforge_pack_file.as_ref()),
        );
        options.insert("pack.packwiz_file".into(), fmt_path(self.pack.packwiz_file.as_ref()));
        options.insert("pack.mods_dir".into(), self.pack.mods_dir.display().to_string());
    }
}

fn fmt_path(path: Option<&PathBuf>) -> String {
    path.map_or_else(String::new, |p| p.display().to_string())
}
