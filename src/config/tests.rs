// modpack-rs: Modpack release tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Config, ConfigLoader};
use crate::logging::LogLevel;
use crate::registry::{curseforge, modrinth};
use std::path::PathBuf;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.global.log_level, LogLevel::INFO);
    assert_eq!(config.global.log_file, None);
    assert_eq!(config.registry.curseforge.api_url, curseforge::DEFAULT_API_URL);
    assert_eq!(config.registry.modrinth.api_url, modrinth::DEFAULT_API_URL);
    assert!(config.registry.modrinth.user_agent.starts_with("modpack-rs/"));
    assert_eq!(config.pack.mods_dir, PathBuf::from("mods"));
    config.validate().expect("defaults are valid");
}

#[test]
fn test_config_parse() {
    let toml = r#"
[global]
log_level = 4
log_file = "logs/modpack.log"

[registry.curseforge]
token = "cf-key"

[registry.modrinth]
user_agent = "me/pack (me@example.com)"

[pack]
packwiz_file = "pack/pack.toml"
"#;
    let config = Config::parse(toml).unwrap();

    assert_eq!(config.global.log_level, LogLevel::DEBUG);
    assert_eq!(config.global.log_file, Some(PathBuf::from("logs/modpack.log")));
    assert_eq!(config.registry.curseforge.token, "cf-key");
    assert_eq!(config.registry.curseforge.api_url, curseforge::DEFAULT_API_URL);
    assert_eq!(config.registry.modrinth.user_agent, "me/pack (me@example.com)");
    assert_eq!(
        config.source_overrides().packwiz_file,
        Some(PathBuf::from("pack/pack.toml"))
    );
    assert_eq!(config.source_overrides().curseforge_pack_file, None);
}

#[test]
fn test_deny_unknown_fields() {
    assert!(Config::parse("[registry.curseforge]\napi_key = \"x\"\n").is_err());
    assert!(Config::parse("[tasks]\nfoo = 1\n").is_err());
}

#[test]
fn test_log_level_out_of_range() {
    let err = Config::parse("[global]\nlog_level = 9\n").unwrap_err();
    assert!(err.to_string().contains("0-6"), "{err}");
}

#[test]
fn test_validate_rejects_bad_api_url() {
    let err = Config::parse("[registry.modrinth]\napi_url = \"not a url\"\n").unwrap_err();
    assert!(err.to_string().contains("registry.modrinth"), "{err}");
}

#[test]
fn test_validate_requires_user_agent() {
    let err = Config::parse("[registry.modrinth]\nuser_agent = \"  \"\n").unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"missing required config key 'user_agent' in section '[registry.modrinth]'"
    );
}

#[test]
fn test_format_options_hides_tokens() {
    let config = Config::parse(
        "[registry.curseforge]\ntoken = \"secret-cf\"\n\n[registry.modrinth]\ntoken = \"secret-mr\"\n",
    )
    .unwrap();
    let options = config.format_options();

    assert!(options.iter().all(|line| !line.contains("secret")));
    assert!(
        options
            .iter()
            .any(|line| line.starts_with("registry.curseforge.token") && line.ends_with("= [hidden]"))
    );
}

#[test]
fn test_format_options_deterministic() {
    let config = Config::default();
    let options = config.format_options();
    assert_eq!(options, config.format_options());

    let keys: Vec<&str> = options
        .iter()
        .filter_map(|line| line.split_whitespace().next())
        .collect();
    let mut sorted = keys.clone();
    sorted.sort_unstable();
    assert_eq!(keys, sorted);
    assert_eq!(keys.len(), 11);
}

#[test]
fn test_config_loader_add_toml_file_not_found() {
    let result = ConfigLoader::new()
        .add_toml_file("/nonexistent/modpack.toml")
        .build();
    assert!(result.is_err(), "build should fail for a missing required file");
}

#[test]
fn test_config_loader_optional_only_tracks_existing() {
    let loader = ConfigLoader::new().add_toml_file_optional("/nonexistent/modpack.toml");
    assert!(loader.format_loaded_files().is_empty());
    loader.build().expect("missing optional file is fine");
}

#[test]
fn test_config_loader_layered_sources() {
    use std::io::Write;
    use tempfile::NamedTempFile;

    let mut file = NamedTempFile::new().expect("failed to create temp file");
    writeln!(
        file,
        r#"
[global]
log_level = 2

[registry.curseforge]
token = "from-file"
"#
    )
    .expect("failed to write");

    let loader = ConfigLoader::new()
        .add_toml_file(file.path())
        .add_toml_str("[global]\nlog_level = 5\n");
    assert_eq!(loader.format_loaded_files().len(), 2);

    let config = loader.build().expect("build should succeed");
    assert_eq!(config.global.log_level, LogLevel::TRACE, "string should override file");
    assert_eq!(config.registry.curseforge.token, "from-file", "file value should persist");
}

#[test]
fn test_config_loader_set_assignment() {
    let config = ConfigLoader::new()
        .add_toml_str("[pack]\nmods_dir = \"mods\"\n")
        .set_assignment("pack.mods_dir = instance/mods")
        .expect("valid assignment")
        .build()
        .expect("build should succeed");

    assert_eq!(config.pack.mods_dir, PathBuf::from("instance/mods"));
    assert!(ConfigLoader::new().set_assignment("no-equals-sign").is_err());
}

#[test]
fn test_config_loader_with_env_prefix() {
    // SAFETY: the variable name is unique to this test.
    unsafe {
        std::env::set_var("MODPACKTEST_REGISTRY__CURSEFORGE__TOKEN", "from-env");
    }

    let config = ConfigLoader::new()
        .add_toml_str("[registry.curseforge]\ntoken = \"from-toml\"\n")
        .with_env_prefix("MODPACKTEST")
        .build()
        .expect("build should succeed");

    assert_eq!(config.registry.curseforge.token, "from-env");

    // SAFETY: same as above
    unsafe {
        std::env::remove_var("MODPACKTEST_REGISTRY__CURSEFORGE__TOKEN");
    }
}
