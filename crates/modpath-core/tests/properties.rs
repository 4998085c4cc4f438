// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use modpath_core::naming::{check_identifier, derive_identifier, render_identifier};
use modpath_core::{resolve_names, AssetDescriptor, GeneratorConfig};
use proptest::prelude::*;
use std::collections::HashSet;

// A deliberately small vocabulary so that generated sets collide a lot.
fn asset_path() -> impl Strategy<Value = String> {
    let dir = prop::sample::select(vec!["A", "B", "Npc", "Boss", "2024", "Npc\\Old"]);
    let stem = prop::sample::select(vec!["X", "Sword", "1_Slime", "Boss_X", "Bad Name"]);
    let ext = prop::sample::select(vec!["png", "ogg", "txt"]);
    (prop::collection::vec(dir, 0..4), stem, ext).prop_map(|(dirs, stem, ext)| {
        let mut path = dirs.join("/");
        if !path.is_empty() {
            path.push('/');
        }
        path.push_str(&format!("{stem}.{ext}"));
        path
    })
}

fn descriptor_set() -> impl Strategy<Value = Vec<AssetDescriptor>> {
    prop::collection::vec(asset_path(), 0..24)
        .prop_map(|paths| paths.into_iter().map(AssetDescriptor::new).collect())
}

fn stem_of(path: &str) -> &str {
    let file_name = path.rsplit(['/', '\\']).next().unwrap_or(path);
    file_name.rsplit_once('.').map_or(file_name, |(stem, _)| stem)
}

proptest! {
    #[test]
    fn prop_names_are_unique(descriptors in descriptor_set()) {
        let resolution = resolve_names(&descriptors, &GeneratorConfig::default());
        let names: HashSet<_> = resolution.accessors.iter().map(|a| &a.name).collect();
        prop_assert_eq!(names.len(), resolution.accessors.len());
    }

    #[test]
    fn prop_every_descriptor_is_named_or_reported(descriptors in descriptor_set()) {
        let resolution = resolve_names(&descriptors, &GeneratorConfig::default());
        prop_assert_eq!(
            resolution.accessors.len() + resolution.diagnostics.len(),
            descriptors.len()
        );
    }

    #[test]
    fn prop_input_order_does_not_matter(descriptors in descriptor_set(), shift in 0usize..24) {
        let config = GeneratorConfig::default();
        let baseline = resolve_names(&descriptors, &config);

        let mut reordered = descriptors.clone();
        reordered.reverse();
        if !reordered.is_empty() {
            let len = reordered.len();
            reordered.rotate_left(shift % len);
        }
        let reordered = resolve_names(&reordered, &config);

        prop_assert_eq!(baseline.accessors, reordered.accessors);
    }

    #[test]
    fn prop_names_are_valid(descriptors in descriptor_set()) {
        let resolution = resolve_names(&descriptors, &GeneratorConfig::default());
        for accessor in &resolution.accessors {
            prop_assert!(check_identifier(&accessor.name).is_ok(), "{}", accessor.name);
            prop_assert!(accessor.name.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '_'));
        }
    }

    #[test]
    fn prop_names_match_direct_derivation(descriptors in descriptor_set()) {
        let resolution = resolve_names(&descriptors, &GeneratorConfig::default());
        for accessor in &resolution.accessors {
            let derivable = (0..=accessor.source_path.matches(['/', '\\']).count()).any(|level| {
                derive_identifier(&accessor.source_path, level)
                    .is_some_and(|identifier| render_identifier(&identifier) == accessor.name)
            });
            prop_assert!(derivable, "{} -> {}", accessor.source_path, accessor.name);
        }
    }

    #[test]
    fn prop_digit_led_stems_are_qualified(descriptors in descriptor_set()) {
        let resolution = resolve_names(&descriptors, &GeneratorConfig::default());
        for accessor in &resolution.accessors {
            let stem = stem_of(&accessor.source_path);
            if stem.starts_with(|ch: char| ch.is_ascii_digit()) {
                prop_assert_ne!(accessor.name.as_str(), stem);
                let suffix = format!("_{stem}");
                prop_assert!(accessor.name.ends_with(&suffix));
            }
        }
    }
}
