// modpack-rs: Modpack release tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI arguments for the `manifest` command.

use clap::Args;
use std::path::PathBuf;

/// Arguments for the `manifest` command.
#[derive(Debug, Clone, Args)]
pub struct ManifestArgs {
    /// Release version written to the manifest.
    #[arg(long, value_name = "VERSION")]
    pub version: String,

    /// Pack author.
    #[arg(long, value_name = "AUTHOR", default_value = "")]
    pub author: String,

    /// Pack name; defaults to the instance name.
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Instance snapshot to read, bypassing detection.
    #[arg(long = "curseforge-pack-file", value_name = "FILE")]
    pub curseforge_pack_file: Option<PathBuf>,

    /// Output path.
    #[arg(short = 'o', long = "output", value_name = "FILE", default_value = "manifest.json")]
    pub output: PathBuf,
}
