// modpack-rs: Modpack release tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for modpack-rs using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! modpack [global options] <command>
//! version
//! options
//! import   [--curseforge-pack-file F] [--packwiz-file F] [--output F] [--compact]
//! manifest --version V [--author A] [--name N] [--output F]
//! ```

pub mod global;
pub mod import;
pub mod manifest;


use crate::cli::global::GlobalOptions;
use crate::cli::import::ImportArgs;
use crate::cli::manifest::ManifestArgs;
use clap::{Parser, Subcommand};

/// Modpack release tool
///
/// Resolves a modpack's mods and their registry metadata.
#[derive(Debug, Parser)]
#[command(
    name = "modpack",
    author,
    version,
    about = "Modpack release tool",
    long_about = "modpack-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Reads a CurseForge instance snapshot or a packwiz pack, looks\n\
                  every mod up on CurseForge and Modrinth, and writes the\n\
                  resulting mod list as JSON. See `modpack <command> --help`\n\
                  for more information about a command.",
    after_help = "CONFIGURATION:\n\n\
                  modpack reads `modpack.toml` from the current directory if it\n\
                  exists, then every --config file in order, then MODPACK_*\n\
                  environment variables (MODPACK_REGISTRY__CURSEFORGE__TOKEN),\n\
                  then --set overrides. Use --no-default-config to skip\n\
                  modpack.toml."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their effective values.
    Options,

    /// Resolves the pack and writes its mod list as JSON.
    Import(ImportArgs),

    /// Writes a `CurseForge` manifest.json from an instance snapshot.
    Manifest(ManifestArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
