// modpack-rs: Modpack release tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI arguments for the `import` command.
//!
//! ```text
//! modpack import                               detect in --dir
//! modpack import --packwiz-file pack/pack.toml
//! modpack import --output mods.json --compact
//! ```

use clap::Args;
use std::path::PathBuf;

/// Arguments for the `import` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ImportArgs {
    /// Instance snapshot to import, bypassing detection.
    #[arg(long = "curseforge-pack-file", value_name = "FILE")]
    pub curseforge_pack_file: Option<PathBuf>,

    /// Packwiz manifest to import, bypassing detection.
    #[arg(long = "packwiz-file", value_name = "FILE")]
    pub packwiz_file: Option<PathBuf>,

    /// `CurseForge` API key.
    #[arg(long = "curseforge-token", value_name = "TOKEN", env = "CURSEFORGE_API_KEY", hide_env_values = true)]
    pub curseforge_token: Option<String>,

    /// Modrinth API token.
    #[arg(long = "modrinth-token", value_name = "TOKEN", env = "MODRINTH_TOKEN", hide_env_values = true)]
    pub modrinth_token: Option<String>,

    /// Write the pack JSON here instead of stdout.
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Emit single-line JSON.
    #[arg(long)]
    pub compact: bool,
}
