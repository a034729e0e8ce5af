// modpack-rs: Modpack release tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mod and pack data model.
//!
//! ```text
//! resolver --> ModReference --+-- File       (local)
//!                             +-- Registry   (curseforge | modrinth)
//!                             +-- Github     (local)
//!
//! registry --> NormalizedMod --(+ id, version)--> ResolvedMod
//!
//! aggregator --> ImportedPack { mods, version }
//! ```
//!
//! Output types serialize in camelCase, the shape the publishing side expects.

use std::fmt;

use serde::{Serialize, Serializer};

/// Remote mod registry backing a [`RegistryRef`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistryKind {
    Curseforge,
    Modrinth,
}

impl RegistryKind {
    /// Name used in logs and error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Curseforge => "curseforge",
            Self::Modrinth => "modrinth",
        }
    }

    /// Whether this registry's own data says anything about library status.
    ///
    /// `CurseForge` exposes category ids that classify libraries; Modrinth does not.
    #[must_use]
    pub const fn infers_library(self) -> bool {
        matches!(self, Self::Curseforge)
    }
}

impl fmt::Display for RegistryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference to a mod hosted on a registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryRef {
    pub registry: RegistryKind,
    pub external_id: String,
    /// Installed file or version, as recorded by the pack.
    pub installed_version: Option<String>,
    /// Library hint computed by the resolver (dependency graph).
    pub library: Option<bool>,
}

/// One physical mod entry found in a pack definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModReference {
    /// A bare mod file with no update metadata.
    File { file_name: String },
    /// A mod resolvable through a remote registry.
    Registry(RegistryRef),
    /// A mod released on GitHub.
    Github { slug: String, tag: String },
}

/// Batch group a [`ModReference`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ReferenceGroup {
    File,
    Modrinth,
    Curseforge,
    Github,
}

impl ReferenceGroup {
    /// All groups, in output order.
    pub const ALL: [Self; 4] = [Self::File, Self::Modrinth, Self::Curseforge, Self::Github];
}

impl ModReference {
    /// Creates a registry reference without a library hint.
    pub fn registry(
        registry: RegistryKind,
        external_id: impl Into<String>,
        installed_version: Option<String>,
    ) -> Self {
        Self::Registry(RegistryRef {
            registry,
            external_id: external_id.into(),
            installed_version,
            library: None,
        })
    }

    /// The registry reference, if this mod resolves through a registry.
    #[must_use]
    pub const fn as_registry(&self) -> Option<&RegistryRef> {
        match self {
            Self::Registry(r) => Some(r),
            _ => None,
        }
    }

    #[must_use]
    pub const fn group(&self) -> ReferenceGroup {
        match self {
            Self::File { .. } => ReferenceGroup::File,
            Self::Registry(r) => match r.registry {
                RegistryKind::Curseforge => ReferenceGroup::Curseforge,
                RegistryKind::Modrinth => ReferenceGroup::Modrinth,
            },
            Self::Github { .. } => ReferenceGroup::Github,
        }
    }
}

/// Insertion-ordered set of category tags.
///
/// Inserting a tag that is already present is a no-op, so the set never holds
/// duplicates and keeps first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySet(Vec<String>);

impl CategorySet {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Inserts a tag, returning `false` if it was already present.
    pub fn insert(&mut self, tag: impl Into<String>) -> bool {
        let tag = tag.into();
        if self.0.contains(&tag) {
            return false;
        }
        self.0.push(tag);
        true
    }

    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<S: Into<String>> FromIterator<S> for CategorySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<S: Into<String>> Extend<S> for CategorySet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for tag in iter {
            self.insert(tag);
        }
    }
}

impl Serialize for CategorySet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

/// Registry metadata in canonical form.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedMod {
    pub external_id: String,
    pub name: String,
    pub slug: String,
    pub categories: CategorySet,
    pub library: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub popularity_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl NormalizedMod {
    /// Minimal record for a mod with no registry metadata.
    pub fn bare(external_id: impl Into<String>, name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            external_id: external_id.into(),
            name: name.into(),
            slug: slug.into(),
            categories: CategorySet::new(),
            library: false,
            popularity_score: None,
            icon: None,
            website_url: None,
            summary: None,
        }
    }
}

/// A mod of the final pack: registry metadata plus pack-specific identity.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedMod {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(flatten)]
    pub metadata: NormalizedMod,
}

impl ResolvedMod {
    /// Resolved record for a bare mod file.
    pub fn from_file(file_name: &str) -> Self {
        Self {
            id: file_name.to_string(),
            version: None,
            metadata: NormalizedMod::bare(file_name, file_name, file_name),
        }
    }

    /// Resolved record for a GitHub-hosted mod.
    ///
    /// The display name is the repository part of `owner/repo`.
    pub fn from_github(slug: &str, tag: &str) -> Self {
        let name = slug.split_once('/').map_or(slug, |(_, repo)| repo);
        let mut metadata = NormalizedMod::bare(slug, name, slug);
        metadata.website_url = Some(format!("https://github.com/{slug}"));
        Self {
            id: slug.to_string(),
            version: Some(tag.to_string()),
            metadata,
        }
    }
}

/// Terminal artifact of a pack import.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportedPack {
    pub mods: Vec<ResolvedMod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}
