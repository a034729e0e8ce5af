// modpack-rs: Modpack release tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing.
//!
//! Tests the CLI module with realistic command-line argument patterns.

use std::path::PathBuf;

use clap::Parser;
use modpack_rs::cli::global::GlobalOptions;
use modpack_rs::cli::{Cli, Command};

// =============================================================================
// Version / Options
// =============================================================================

#[test]
fn cli_version_command() {
    let cli = Cli::try_parse_from(["modpack", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn cli_options_command() {
    let cli = Cli::try_parse_from(["modpack", "--no-default-config", "options"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Options)));
    assert!(cli.global.no_default_config);
}

#[test]
fn cli_no_command() {
    let cli = Cli::try_parse_from(["modpack"]).unwrap();
    assert!(cli.command.is_none());
}

#[test]
fn cli_unknown_command() {
    assert!(Cli::try_parse_from(["modpack", "build"]).is_err());
}

// =============================================================================
// Import Command
// =============================================================================

#[test]
fn cli_import_defaults() {
    let cli = Cli::try_parse_from(["modpack", "import"]).unwrap();
    let Some(Command::Import(args)) = cli.command else {
        panic!("expected import");
    };
    assert_eq!(args.output, None);
    assert!(!args.compact);
}

#[test]
fn cli_import_curseforge_pack_file() {
    let cli = Cli::try_parse_from([
        "modpack",
        "import",
        "--curseforge-pack-file",
        "instance/minecraftinstance.json",
        "--curseforge-token",
        "key",
    ])
    .unwrap();
    let Some(Command::Import(args)) = cli.command else {
        panic!("expected import");
    };
    assert_eq!(
        args.curseforge_pack_file,
        Some(PathBuf::from("instance/minecraftinstance.json"))
    );
    assert_eq!(args.curseforge_token.as_deref(), Some("key"));
}

// =============================================================================
// Manifest Command
// =============================================================================

#[test]
fn cli_manifest_full() {
    let cli = Cli::try_parse_from([
        "modpack",
        "manifest",
        "--version",
        "2.0.0",
        "--author",
        "someone",
        "--name",
        "My Pack",
        "-o",
        "build/manifest.json",
    ])
    .unwrap();
    let Some(Command::Manifest(args)) = cli.command else {
        panic!("expected manifest");
    };
    assert_eq!(args.name.as_deref(), Some("My Pack"));
    assert_eq!(args.output, PathBuf::from("build/manifest.json"));
}

// =============================================================================
// Global options
// =============================================================================

#[test]
fn global_overrides_file_level_falls_back() {
    let global = GlobalOptions {
        log_level: Some(4),
        log_file: Some(PathBuf::from("modpack.log")),
        ..Default::default()
    };
    assert_eq!(
        global.to_config_overrides(),
        [
            "global.log_level=4",
            "global.file_log_level=4",
            "global.log_file=modpack.log",
        ]
    );
}

#[test]
fn global_overrides_explicit_file_level() {
    let global = GlobalOptions {
        log_level: Some(1),
        file_log_level: Some(5),
        options: vec!["registry.modrinth.user_agent=me/pack".to_string()],
        ..Default::default()
    };
    assert_eq!(
        global.to_config_overrides(),
        [
            "registry.modrinth.user_agent=me/pack",
            "global.log_level=1",
            "global.file_log_level=5",
        ]
    );
}
