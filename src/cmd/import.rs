// modpack-rs: Modpack release tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Import command implementation.
//!
//! ```text
//! config + args --> registry clients --> Aggregator (+ spinner callback)
//!                                            |
//!                       import_pack(dir) <---+
//!                            |
//!                            v
//!                  ImportedPack JSON --> stdout | --output
//! ```

use std::path::Path;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use crate::cli::import::ImportArgs;
use crate::config::Config;
use crate::error::Result;
use crate::model::ImportedPack;
use crate::pack::{Aggregator, ProgressCallback, ProgressEvent, SourceOverrides, import_pack};
use crate::registry::{CurseforgeClient, ModrinthClient};

/// Pre-validated spinner style.
fn spinner_style() -> ProgressStyle {
    static STYLE: OnceLock<ProgressStyle> = OnceLock::new();
    STYLE
        .get_or_init(|| {
            ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
        })
        .clone()
}

fn non_empty(value: &str) -> Option<&str> {
    let value = value.trim();
    (!value.is_empty()).then_some(value)
}

/// Build the aggregator from configuration, with CLI tokens taking precedence.
///
/// The `CurseForge` client is only created when an API key is available;
/// packs without `CurseForge` mods import fine without one.
#[must_use]
pub fn build_aggregator(
    config: &Config,
    args: &ImportArgs,
    progress: Option<ProgressCallback>,
) -> Aggregator {
    let curseforge_token = args
        .curseforge_token
        .as_deref()
        .and_then(non_empty)
        .or_else(|| non_empty(&config.registry.curseforge.token));
    let mut aggregator = Aggregator::builder().maybe_progress(progress).build();

    match curseforge_token {
        Some(token) => {
            aggregator = aggregator.with_client(Arc::new(CurseforgeClient::with_api_url(
                &config.registry.curseforge.api_url,
                token,
            )));
        }
        None => debug!("no CurseForge API key configured"),
    }

    let modrinth_token = args
        .modrinth_token
        .as_deref()
        .and_then(non_empty)
        .or_else(|| non_empty(&config.registry.modrinth.token));
    aggregator.with_client(Arc::new(ModrinthClient::with_api_url(
        &config.registry.modrinth.api_url,
        modrinth_token,
        &config.registry.modrinth.user_agent,
    )))
}

/// Serialize the pack as pretty or single-line JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_pack(pack: &ImportedPack, compact: bool) -> Result<String> {
    let json = if compact {
        serde_json::to_string(pack)?
    } else {
        serde_json::to_string_pretty(pack)?
    };
    Ok(json)
}

fn spinner_callback(spinner: &ProgressBar) -> ProgressCallback {
    let spinner = spinner.clone();
    Arc::new(move |event: ProgressEvent| match event {
        ProgressEvent::BatchStarted { registry, count } => {
            spinner.set_message(format!("fetching {count} mods from {registry}"));
        }
        ProgressEvent::BatchFinished { registry, count } => {
            spinner.println(format!("received {count} mods from {registry}"));
        }
        ProgressEvent::LocalResolved { count } => {
            spinner.set_message(format!("resolved {count} local mods"));
        }
    })
}

/// Main handler for the import command.
///
/// # Errors
///
/// Returns an error if the pack cannot be detected or resolved, a registry
/// request fails, or the output cannot be written.
pub async fn run_import_command(args: &ImportArgs, config: &Config, dir: &Path) -> Result<()> {
    let configured = config.source_overrides();
    let overrides = SourceOverrides {
        curseforge_pack_file: args
            .curseforge_pack_file
            .clone()
            .or(configured.curseforge_pack_file),
        packwiz_file: args.packwiz_file.clone().or(configured.packwiz_file),
    };

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(spinner_style());
    spinner.set_message("reading pack");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let aggregator = build_aggregator(config, args, Some(spinner_callback(&spinner)));
    let result = import_pack(&overrides, dir, &aggregator).await;
    spinner.finish_and_clear();

    let pack = result.context("failed to import pack")?;
    let json = render_pack(&pack, args.compact)?;

    match &args.output {
        Some(path) => {
            tokio::fs::write(path, json)
                .await
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), mods = pack.mods.len(), "wrote pack");
        }
        None => println!("{json}"),
    }
    Ok(())
}
