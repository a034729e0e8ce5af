// modpack-rs: Modpack release tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `CurseForge` registry client.
//!
//! | Operation     | Request                          |
//! |---------------|----------------------------------|
//! | `fetch_one`   | `GET /mods/{id}`                 |
//! | `fetch_batch` | `POST /mods {"modIds": [..]}`    |
//!
//! Responses are wrapped in `{"data": ...}`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{RegistryClient, registry_error};
use crate::category::normalize_categories;
use crate::error::{ModpackResult, RegistryError};
use crate::model::{NormalizedMod, RegistryKind};
use crate::net::ApiClient;

pub const DEFAULT_API_URL: &str = "https://api.curseforge.com/v1";

/// Primary category ids that mark a mod as a library ("API and Library", "Miscellaneous").
pub const LIBRARY_PRIMARY_CATEGORIES: [u64; 2] = [421, 425];

/// Category ids a library may carry without losing its library status.
pub const LIBRARY_LIKE_CATEGORIES: [u64; 5] = [421, 425, 423, 435, 5191];

const KIND: RegistryKind = RegistryKind::Curseforge;

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CurseforgeMod {
    id: u64,
    name: String,
    slug: String,
    summary: Option<String>,
    primary_category_id: Option<u64>,
    #[serde(default)]
    categories: Vec<CurseforgeCategory>,
    game_popularity_rank: Option<f64>,
    links: Option<CurseforgeLinks>,
    logo: Option<CurseforgeLogo>,
}

#[derive(Debug, Deserialize)]
struct CurseforgeCategory {
    id: u64,
    name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CurseforgeLinks {
    website_url: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CurseforgeLogo {
    thumbnail_url: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ModsRequest<'a> {
    mod_ids: &'a [u64],
}

/// Library classification from `CurseForge` category ids.
///
/// A mod is a library when its primary category is a library category and
/// none of its categories falls outside the library-like set.
pub fn is_library(primary_category_id: Option<u64>, category_ids: impl IntoIterator<Item = u64>) -> bool {
    primary_category_id.is_some_and(|id| LIBRARY_PRIMARY_CATEGORIES.contains(&id))
        && category_ids
            .into_iter()
            .all(|id| LIBRARY_LIKE_CATEGORIES.contains(&id))
}

impl CurseforgeMod {
    fn normalize(self) -> NormalizedMod {
        let library = is_library(
            self.primary_category_id,
            self.categories.iter().map(|c| c.id),
        );
        let categories = normalize_categories(self.categories.iter().map(|c| c.name.as_str()));

        NormalizedMod {
            external_id: self.id.to_string(),
            name: self.name,
            slug: self.slug,
            categories,
            library,
            popularity_score: self.game_popularity_rank,
            icon: self.logo.and_then(|logo| logo.thumbnail_url),
            website_url: self.links.and_then(|links| links.website_url),
            summary: self.summary,
        }
    }
}

/// Client for the `CurseForge` core API.
#[derive(Debug, Clone)]
pub struct CurseforgeClient {
    api: ApiClient,
}

impl CurseforgeClient {
    /// Client for the public API, authenticated with `api_key`.
    #[must_use]
    pub fn new(api_key: &str) -> Self {
        Self::with_api_url(DEFAULT_API_URL, api_key)
    }

    #[must_use]
    pub fn with_api_url(api_url: &str, api_key: &str) -> Self {
        let api = ApiClient::new(api_url)
            .header("x-api-key", api_key)
            .header("Accept", "application/json");
        Self { api }
    }

    fn parse_id(id: &str) -> Result<u64, RegistryError> {
        id.trim().parse().map_err(|_| RegistryError::InvalidId {
            registry: KIND,
            id: id.to_string(),
        })
    }
}

#[async_trait]
impl RegistryClient for CurseforgeClient {
    fn kind(&self) -> RegistryKind {
        KIND
    }

    async fn fetch_one(&self, id: &str) -> ModpackResult<NormalizedMod> {
        let project_id = Self::parse_id(id)?;
        debug!(registry = %KIND, id, "fetching mod");

        let response: Envelope<CurseforgeMod> = self
            .api
            .get_json(&format!("/mods/{project_id}"), &[])
            .await
            .map_err(|e| registry_error(KIND, &[id.to_string()], e))?;

        Ok(response.data.normalize())
    }

    async fn fetch_batch(&self, ids: &[String]) -> ModpackResult<Vec<NormalizedMod>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mod_ids = ids
            .iter()
            .map(|id| Self::parse_id(id))
            .collect::<Result<Vec<_>, _>>()?;
        debug!(registry = %KIND, count = ids.len(), "fetching mods");

        let response: Envelope<Vec<CurseforgeMod>> = self
            .api
            .post_json("/mods", &ModsRequest { mod_ids: &mod_ids })
            .await
            .map_err(|e| registry_error(KIND, ids, e))?;

        Ok(response.data.into_iter().map(CurseforgeMod::normalize).collect())
    }
}
