// modpack-rs: Modpack release tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Category taxonomy reconciliation.
//!
//! ```text
//! "Armor, Tools, and Weapons"
//!    | lower-case, [\s,]+ -> "-"
//!    v
//! "armor-tools-and-weapons" --table--> ["equipment"]
//! "server-utility"          --table--> [KeepOriginal, "utility"]
//!                                     = ["server-utility", "utility"]
//! "magic"                   --miss---> ["magic"]
//! ```
//!
//! The canonical vocabulary is Modrinth's; `CurseForge` labels are mapped onto it.
//! Tags produced for one mod are collected into a [`CategorySet`], which drops
//! duplicates and keeps first-seen order.

use std::sync::OnceLock;

use regex::Regex;

use crate::model::CategorySet;

/// One output of a replacement table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Replacement {
    /// Emit this canonical tag.
    Tag(&'static str),
    /// Emit the normalized input label itself.
    KeepOriginal,
}

use Replacement::{KeepOriginal, Tag};

/// Normalized label -> canonical tags.
///
/// An empty list drops the label entirely.
const REPLACEMENTS: &[(&str, &[Replacement])] = &[
    ("adventure-and-rpg", &[Tag("adventure")]),
    ("api-and-library", &[Tag("library")]),
    ("armor-tools-and-weapons", &[Tag("equipment")]),
    ("cosmetic", &[Tag("decoration")]),
    ("map-and-information", &[Tag("utility")]),
    ("server-utility", &[KeepOriginal, Tag("utility")]),
    ("utility-&-qol", &[Tag("utility")]),
    ("performance", &[Tag("optimization")]),
    ("world-gen", &[Tag("worldgen")]),
    ("biomes", &[Tag("worldgen"), KeepOriginal]),
    ("dimensions", &[Tag("worldgen"), KeepOriginal]),
    ("structures", &[Tag("worldgen"), KeepOriginal]),
    ("ores-and-resources", &[Tag("worldgen")]),
    ("player-transport", &[Tag("transportation")]),
    (
        "energy-fluid-and-item-transport",
        &[Tag("technology"), Tag("transportation")],
    ),
    ("energy", &[Tag("technology"), KeepOriginal]),
    ("automation", &[Tag("technology"), KeepOriginal]),
    ("redstone", &[Tag("technology"), KeepOriginal]),
    ("processing", &[Tag("technology")]),
    ("farming", &[Tag("food"), KeepOriginal]),
    ("miscellaneous", &[]),
    ("addons", &[]),
];

fn separator_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[\s,]+").expect("separator pattern is valid"))
}

fn lookup(label: &str) -> Option<&'static [Replacement]> {
    REPLACEMENTS
        .iter()
        .find(|(key, _)| *key == label)
        .map(|(_, replacements)| *replacements)
}

/// Lower-cases a raw label and collapses runs of whitespace and commas into `-`.
#[must_use]
pub fn normalize_label(raw: &str) -> String {
    let lower = raw.trim().to_lowercase();
    separator_pattern().replace_all(&lower, "-").into_owned()
}

/// Canonical tags for a single raw label, in table order.
#[must_use]
pub fn canonical_tags(raw: &str) -> Vec<String> {
    let label = normalize_label(raw);
    match lookup(&label) {
        Some(replacements) => replacements
            .iter()
            .map(|replacement| match replacement {
                Tag(tag) => (*tag).to_string(),
                KeepOriginal => label.clone(),
            })
            .collect(),
        None => vec![label],
    }
}

/// Normalizes all raw labels of one mod into a deduplicated tag set.
pub fn normalize_categories<I, S>(labels: I) -> CategorySet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    labels
        .into_iter()
        .flat_map(|label| canonical_tags(label.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests;
