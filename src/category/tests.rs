// modpack-rs: Modpack release tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{REPLACEMENTS, canonical_tags, normalize_categories, normalize_label};

#[test]
fn test_normalize_label() {
    let results: Vec<_> = [
        "Server Utility",
        "Armor, Tools, and Weapons",
        "  Utility & QoL ",
        "Energy,  Fluid, and Item Transport",
        "magic",
    ]
    .into_iter()
    .map(normalize_label)
    .collect();

    assert_eq!(
        results,
        [
            "server-utility",
            "armor-tools-and-weapons",
            "utility-&-qol",
            "energy-fluid-and-item-transport",
            "magic",
        ]
    );
}

#[test]
fn test_server_utility_keeps_itself() {
    assert_eq!(canonical_tags("Server Utility"), ["server-utility", "utility"]);
}

#[test]
fn test_unknown_label_passes_through() {
    assert_eq!(canonical_tags("Mobs"), ["mobs"]);
}

#[test]
fn test_dropped_label() {
    assert!(canonical_tags("Miscellaneous").is_empty());
}

#[test]
fn test_multi_tag_expansion() {
    assert_eq!(
        canonical_tags("Energy, Fluid, and Item Transport"),
        ["technology", "transportation"]
    );
}

#[test]
fn test_normalize_categories_dedupes_across_labels() {
    let tags = normalize_categories([
        "Server Utility",
        "Utility & QoL",
        "Map and Information",
        "Redstone",
        "Automation",
    ]);

    assert_eq!(
        tags.as_slice(),
        ["server-utility", "utility", "technology", "redstone", "automation"]
    );
}

#[test]
fn test_every_table_entry_yields_unique_tags() {
    for (label, _) in REPLACEMENTS {
        let tags = normalize_categories([*label]);
        let mut seen = std::collections::HashSet::new();
        for tag in tags.iter() {
            assert!(seen.insert(tag), "duplicate tag {tag} for {label}");
        }
        assert_eq!(normalize_label(label), *label, "table key {label} is not normalized");
    }
}
