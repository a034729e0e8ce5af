// modpack-rs: Modpack release tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Modrinth registry client.
//!
//! | Operation     | Request                          |
//! |---------------|----------------------------------|
//! | `fetch_one`   | `GET /project/{id}`              |
//! | `fetch_batch` | `GET /projects?ids=["a","b"]`    |
//!
//! Modrinth categories already use the canonical vocabulary and pass through
//! unchanged. Modrinth data carries no library classification.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::{RegistryClient, registry_error};
use crate::error::ModpackResult;
use crate::model::{CategorySet, NormalizedMod, RegistryKind};
use crate::net::ApiClient;

pub const DEFAULT_API_URL: &str = "https://api.modrinth.com/v2";

const KIND: RegistryKind = RegistryKind::Modrinth;

#[derive(Debug, Deserialize)]
struct ModrinthProject {
    id: String,
    title: String,
    slug: String,
    #[serde(default)]
    categories: Vec<String>,
    description: Option<String>,
    icon_url: Option<String>,
    downloads: Option<f64>,
}

impl ModrinthProject {
    fn normalize(self) -> NormalizedMod {
        let website_url = format!("https://modrinth.com/mod/{}", self.slug);
        NormalizedMod {
            external_id: self.id,
            name: self.title,
            slug: self.slug,
            categories: self.categories.into_iter().collect::<CategorySet>(),
            library: false,
            popularity_score: self.downloads,
            icon: self.icon_url,
            website_url: Some(website_url),
            summary: self.description,
        }
    }
}

/// Encode ids the way the `/projects` endpoint expects: `["a","b"]`.
fn encode_ids(ids: &[String]) -> String {
    let quoted: Vec<String> = ids.iter().map(|id| format!("\"{id}\"")).collect();
    format!("[{}]", quoted.join(","))
}

/// Client for the Modrinth v2 API.
#[derive(Debug, Clone)]
pub struct ModrinthClient {
    api: ApiClient,
}

impl ModrinthClient {
    /// Client for the public API. The token is optional for read access.
    #[must_use]
    pub fn new(token: Option<&str>, user_agent: &str) -> Self {
        Self::with_api_url(DEFAULT_API_URL, token, user_agent)
    }

    #[must_use]
    pub fn with_api_url(api_url: &str, token: Option<&str>, user_agent: &str) -> Self {
        let mut api = ApiClient::new(api_url)
            .header("Accept", "application/json")
            .header("User-Agent", user_agent);
        if let Some(token) = token {
            api = api.header("Authorization", token);
        }
        Self { api }
    }
}

#[async_trait]
impl RegistryClient for ModrinthClient {
    fn kind(&self) -> RegistryKind {
        KIND
    }

    async fn fetch_one(&self, id: &str) -> ModpackResult<NormalizedMod> {
        debug!(registry = %KIND, id, "fetching mod");

        let ids = [id.to_string()];
        let url = self
            .api
            .segment_url("/project", id)
            .map_err(|e| registry_error(KIND, &ids, e))?;
        let project: ModrinthProject = self
            .api
            .get_json_at(url)
            .await
            .map_err(|e| registry_error(KIND, &ids, e))?;

        Ok(project.normalize())
    }

    async fn fetch_batch(&self, ids: &[String]) -> ModpackResult<Vec<NormalizedMod>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        debug!(registry = %KIND, count = ids.len(), "fetching mods");

        let encoded = encode_ids(ids);
        let projects: Vec<ModrinthProject> = self
            .api
            .get_json("/projects", &[("ids", encoded.as_str())])
            .await
            .map_err(|e| registry_error(KIND, ids, e))?;

        Ok(projects.into_iter().map(ModrinthProject::normalize).collect())
    }
}
