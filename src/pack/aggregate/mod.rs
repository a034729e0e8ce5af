// modpack-rs: Modpack release tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Aggregation of mod references into resolved mods.
//!
//! ```text
//! Vec<ModReference>
//!     |  group
//!     +-- File ------------------------------> ResolvedMod::from_file
//!     +-- Modrinth ---+
//!     |               +-- try_join! --> fetch_batch (one request each)
//!     +-- Curseforge -+                    |
//!     |                                    v  re-key by external_id
//!     |                              merge(reference, metadata)
//!     +-- Github ----------------------------> ResolvedMod::from_github
//!
//! output: File, Modrinth, Curseforge, Github; reference order within groups
//! ```
//!
//! Library merge rules:
//!
//! | Registry   | Hint present          | No hint          |
//! |------------|-----------------------|------------------|
//! | curseforge | `registry AND hint`   | `registry`       |
//! | modrinth   | `hint`                | `false`          |

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

use bon::Builder;
use tracing::{debug, info};

use crate::error::{ModpackResult, PackError};
use crate::model::{
    ModReference, NormalizedMod, ReferenceGroup, RegistryKind, RegistryRef, ResolvedMod,
};
use crate::registry::RegistryClient;

/// Progress notifications emitted while aggregating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressEvent {
    /// A registry batch request is about to be sent.
    BatchStarted { registry: RegistryKind, count: usize },
    /// A registry batch returned `count` records.
    BatchFinished { registry: RegistryKind, count: usize },
    /// File and GitHub references were resolved without any request.
    LocalResolved { count: usize },
}

/// Receiver for [`ProgressEvent`]s.
pub type ProgressCallback = Arc<dyn Fn(ProgressEvent) + Send + Sync>;

/// Merges resolver output with registry metadata.
///
/// Clients are supplied by the caller; a group whose client is absent fails
/// only if the pack actually references it.
///
/// # Example
///
/// ```ignore
/// let aggregator = Aggregator::builder()
///     .curseforge(Arc::new(CurseforgeClient::new(&key)))
///     .build();
/// let mods = aggregator.aggregate(&references).await?;
/// ```
#[derive(Clone, Default, Builder)]
pub struct Aggregator {
    curseforge: Option<Arc<dyn RegistryClient>>,
    modrinth: Option<Arc<dyn RegistryClient>>,
    progress: Option<ProgressCallback>,
}

impl fmt::Debug for Aggregator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Aggregator")
            .field("curseforge", &self.curseforge.is_some())
            .field("modrinth", &self.modrinth.is_some())
            .field("progress", &self.progress.is_some())
            .finish()
    }
}

/// References split by batch group, each in input order.
struct Grouped<'a>(HashMap<ReferenceGroup, Vec<&'a ModReference>>);

impl<'a> Grouped<'a> {
    fn new(references: &'a [ModReference]) -> Self {
        let mut groups: HashMap<_, Vec<_>> = HashMap::new();
        for reference in references {
            groups.entry(reference.group()).or_default().push(reference);
        }
        Self(groups)
    }

    fn get(&self, group: ReferenceGroup) -> &[&'a ModReference] {
        self.0.get(&group).map(Vec::as_slice).unwrap_or_default()
    }

    fn registry_refs(&self, group: ReferenceGroup) -> Vec<&'a RegistryRef> {
        self.get(group)
            .iter()
            .copied()
            .filter_map(ModReference::as_registry)
            .collect()
    }
}

/// Apply the merge rules to one registry record.
fn merge(reference: &RegistryRef, mut metadata: NormalizedMod) -> ResolvedMod {
    metadata.library = if reference.registry.infers_library() {
        reference
            .library
            .map_or(metadata.library, |hint| hint && metadata.library)
    } else {
        reference.library.unwrap_or(false)
    };

    ResolvedMod {
        id: reference.external_id.clone(),
        version: reference.installed_version.clone(),
        metadata,
    }
}

impl Aggregator {
    /// Register `client` for the registry it reports, replacing any previous one.
    #[must_use]
    pub fn with_client(mut self, client: Arc<dyn RegistryClient>) -> Self {
        match client.kind() {
            RegistryKind::Curseforge => self.curseforge = Some(client),
            RegistryKind::Modrinth => self.modrinth = Some(client),
        }
        self
    }

    fn client(&self, registry: RegistryKind) -> Option<&dyn RegistryClient> {
        match registry {
            RegistryKind::Curseforge => self.curseforge.as_deref(),
            RegistryKind::Modrinth => self.modrinth.as_deref(),
        }
    }

    fn emit(&self, event: ProgressEvent) {
        if let Some(progress) = &self.progress {
            progress(event);
        }
    }

    /// Fetch one group in a single batch, keyed by external id.
    async fn fetch_group(
        &self,
        registry: RegistryKind,
        references: &[&RegistryRef],
    ) -> ModpackResult<HashMap<String, NormalizedMod>> {
        if references.is_empty() {
            return Ok(HashMap::new());
        }

        let client = self
            .client(registry)
            .ok_or(PackError::RegistryNotConfigured { registry })?;

        let mut seen = HashSet::new();
        let ids: Vec<String> = references
            .iter()
            .filter(|r| seen.insert(r.external_id.as_str()))
            .map(|r| r.external_id.clone())
            .collect();

        debug!(%registry, count = ids.len(), "fetching batch");
        self.emit(ProgressEvent::BatchStarted {
            registry,
            count: ids.len(),
        });

        let mods = client.fetch_batch(&ids).await?;

        self.emit(ProgressEvent::BatchFinished {
            registry,
            count: mods.len(),
        });
        debug!(%registry, count = mods.len(), "batch returned");

        Ok(mods
            .into_iter()
            .map(|m| (m.external_id.clone(), m))
            .collect())
    }

    /// Resolve every reference of a pack.
    ///
    /// The modrinth and curseforge batches run concurrently; each is a
    /// single request.
    ///
    /// # Errors
    ///
    /// Returns [`PackError::RegistryNotConfigured`] if a referenced registry
    /// has no client, [`PackError::UnresolvedMod`] if a batch response lacks
    /// a requested id, or the registry error of a failed batch.
    pub async fn aggregate(&self, references: &[ModReference]) -> ModpackResult<Vec<ResolvedMod>> {
        let grouped = Grouped::new(references);
        let modrinth_refs = grouped.registry_refs(ReferenceGroup::Modrinth);
        let curseforge_refs = grouped.registry_refs(ReferenceGroup::Curseforge);

        let (modrinth, curseforge) = tokio::try_join!(
            self.fetch_group(RegistryKind::Modrinth, &modrinth_refs),
            self.fetch_group(RegistryKind::Curseforge, &curseforge_refs),
        )?;

        let mut mods = Vec::with_capacity(references.len());
        let mut local = 0;
        for group in ReferenceGroup::ALL {
            for reference in grouped.get(group).iter().copied() {
                let resolved = match reference {
                    ModReference::File { file_name } => {
                        local += 1;
                        ResolvedMod::from_file(file_name)
                    }
                    ModReference::Github { slug, tag } => {
                        local += 1;
                        ResolvedMod::from_github(slug, tag)
                    }
                    ModReference::Registry(r) => {
                        let fetched = match r.registry {
                            RegistryKind::Modrinth => &modrinth,
                            RegistryKind::Curseforge => &curseforge,
                        };
                        let metadata = fetched.get(&r.external_id).cloned().ok_or_else(|| {
                            PackError::UnresolvedMod {
                                registry: r.registry,
                                id: r.external_id.clone(),
                            }
                        })?;
                        merge(r, metadata)
                    }
                };
                mods.push(resolved);
            }
        }

        self.emit(ProgressEvent::LocalResolved { count: local });
        info!(mods = mods.len(), "aggregated pack");
        Ok(mods)
    }
}
