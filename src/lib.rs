// modpack-rs: Modpack release tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |          import / manifest / options
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |   TOML, layered settings  |
//!              '-------------+-------------'
//!                            v
//!   pack:  detect --> packwiz | instance --> aggregate
//!                                               |
//!                                               v
//!   registry:  curseforge / modrinth  (RegistryClient)
//!                  |            |
//!                  v            v
//!            category         net
//!           normalizer     HTTP/JSON
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging, model     |
//!   +-----------------------------------------+
//! ```

pub mod category;
pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod net;
pub mod pack;
pub mod registry;
