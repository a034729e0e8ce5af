// modpack-rs: Modpack release tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            ModpackError (16 bytes)
//!                     |
//!   +--------+--------+--------+--------+
//!   v        v        v        v        v
//! Pack   Registry    Net      Cfg      Fs
//!  Box      Box      Box      Box      Box
//!
//! Sub-errors (unboxed internally):
//!   Pack     NoPackDetected, PackFileMissing, MissingUpdateInfo,
//!            UnresolvedMod, RegistryNotConfigured, Parse
//!   Registry Rejected, Transport, Decode, InvalidId
//!   Network  Reqwest, HttpError, InvalidUrl, Decode
//!   Config   MissingKey, InvalidValue
//!   Fs       NotFound, IoError
//!
//! All variants boxed => ModpackError stays pointer-sized plus tag.
//! ```

use thiserror::Error;

use crate::model::RegistryKind;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`ModpackError`].
pub type ModpackResult<T> = std::result::Result<T, ModpackError>;

/// Top-level library error type.
///
/// All sub-errors are boxed to keep this enum small on the stack.
#[derive(Debug, Error)]
pub enum ModpackError {
    /// Pack detection, parsing or aggregation failed.
    #[error("pack error: {0}")]
    Pack(#[from] Box<PackError>),

    /// A registry rejected or failed a request.
    #[error("registry error: {0}")]
    Registry(#[from] Box<RegistryError>),

    /// Network operation failed.
    #[error("network error: {0}")]
    Network(#[from] Box<NetworkError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for ModpackError {
                fn from(err: $error) -> Self {
                    ModpackError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    PackError => Pack,
    RegistryError => Registry,
    NetworkError => Network,
    ConfigError => Config,
    FsError => Fs,
}

impl ModpackError {
    /// Returns the pack error, if this is one.
    #[must_use]
    pub fn as_pack(&self) -> Option<&PackError> {
        match self {
            Self::Pack(err) => Some(&**err),
            _ => None,
        }
    }

    /// Returns the registry error, if this is one.
    #[must_use]
    pub fn as_registry(&self) -> Option<&RegistryError> {
        match self {
            Self::Registry(err) => Some(&**err),
            _ => None,
        }
    }

    /// Returns the filesystem error, if this is one.
    #[must_use]
    pub fn as_fs(&self) -> Option<&FsError> {
        match self {
            Self::Fs(err) => Some(&**err),
            _ => None,
        }
    }
}

// --- Pack Errors ---

/// Pack detection, parsing and aggregation errors.
#[derive(Debug, Error)]
pub enum PackError {
    /// Neither an instance snapshot nor a packwiz manifest was found.
    #[error("no pack metadata file detected (looked for minecraftinstance.json and pack.toml)")]
    NoPackDetected,

    /// A pack file given explicitly does not exist.
    #[error("pack file not found: {path}")]
    PackFileMissing { path: String },

    /// A packwiz mod definition carries no recognized update block.
    #[error("mod definition {path} is missing update information")]
    MissingUpdateInfo { path: String },

    /// A registry batch response did not contain a requested id.
    #[error("mod '{id}' was not returned by {registry}")]
    UnresolvedMod { registry: RegistryKind, id: String },

    /// The pack references a registry no client was configured for.
    #[error("pack references {registry} mods but no {registry} client is configured")]
    RegistryNotConfigured { registry: RegistryKind },

    /// A pack file could not be parsed.
    #[error("failed to parse {path}: {message}")]
    Parse { path: String, message: String },
}

// --- Registry Errors ---

/// Registry request errors. `ids` lists every id of the failed request.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The registry answered with a non-success status.
    #[error("{registry} rejected request for [{}] with status {status}", .ids.join(", "))]
    Rejected {
        registry: RegistryKind,
        ids: Vec<String>,
        status: u16,
    },

    /// The request could not be sent or the body could not be read.
    #[error("{registry} request for [{}] failed: {message}", .ids.join(", "))]
    Transport {
        registry: RegistryKind,
        ids: Vec<String>,
        message: String,
    },

    /// The response body did not match the expected shape.
    #[error("{registry} response for [{}] could not be decoded: {message}", .ids.join(", "))]
    Decode {
        registry: RegistryKind,
        ids: Vec<String>,
        message: String,
    },

    /// The id is not valid for this registry.
    #[error("'{id}' is not a valid {registry} mod id")]
    InvalidId { registry: RegistryKind, id: String },
}

impl RegistryError {
    /// The registry the failed request was addressed to.
    #[must_use]
    pub const fn registry(&self) -> RegistryKind {
        match self {
            Self::Rejected { registry, .. }
            | Self::Transport { registry, .. }
            | Self::Decode { registry, .. }
            | Self::InvalidId { registry, .. } => *registry,
        }
    }
}

// --- Network Errors ---

/// Network operation errors.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// HTTP error response.
    #[error("http error {status}: {url}")]
    HttpError { status: u16, url: String },

    /// Error from reqwest library.
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// Invalid URL.
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    /// Response body is not the expected JSON.
    #[error("unexpected response body from {url}: {message}")]
    Decode { url: String, message: String },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Missing required configuration key.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Path not found.
    #[error("path not found: {0}")]
    NotFound(String),

    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
