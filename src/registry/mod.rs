// modpack-rs: Modpack release tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mod registry clients.
//!
//! ```text
//!                 RegistryClient (async trait)
//!                fetch_one / fetch_batch
//!                   |                |
//!          CurseforgeClient     ModrinthClient
//!          GET  /mods/{id}      GET /project/{id}
//!          POST /mods           GET /projects?ids=[..]
//!                   |                |
//!          raw payload ------> NormalizedMod
//!          (categories via category::normalize_categories)
//! ```
//!
//! Batch results are unordered; callers re-key them by `external_id`.
//! A batch either succeeds as a whole or fails with a [`RegistryError`]
//! naming the backend and every requested id.

pub mod curseforge;
pub mod modrinth;

use async_trait::async_trait;

use crate::error::{ModpackResult, NetworkError, RegistryError};
use crate::model::{NormalizedMod, RegistryKind};

pub use curseforge::CurseforgeClient;
pub use modrinth::ModrinthClient;

/// Capability shared by every registry backend.
#[async_trait]
pub trait RegistryClient: Send + Sync {
    /// Registry this client talks to.
    fn kind(&self) -> RegistryKind;

    /// Fetch metadata for a single mod.
    async fn fetch_one(&self, id: &str) -> ModpackResult<NormalizedMod>;

    /// Fetch metadata for many mods in one request.
    ///
    /// The result order is unspecified. An empty `ids` slice performs no
    /// request and yields an empty list.
    async fn fetch_batch(&self, ids: &[String]) -> ModpackResult<Vec<NormalizedMod>>;
}

/// Attach registry and id context to a transport failure.
pub(crate) fn registry_error(registry: RegistryKind, ids: &[String], err: NetworkError) -> RegistryError {
    let ids = ids.to_vec();
    match err {
        NetworkError::HttpError { status, .. } => RegistryError::Rejected {
            registry,
            ids,
            status,
        },
        NetworkError::Decode { message, .. } => RegistryError::Decode {
            registry,
            ids,
            message,
        },
        other => RegistryError::Transport {
            registry,
            ids,
            message: other.to_string(),
        },
    }
}
