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

//! Inputs handed over by the build host.
//!
//! The host knows which files exist and carries per-file metadata as strings.
//! [`AssetItem`] mirrors that raw view; [`AssetDescriptor`] is what remains once
//! an item is known to be packed and to have a logical path.

use crate::config::parse_flag;

/// One packable asset, identified by its logical path inside the mod.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetDescriptor {
    path: String,
}

impl AssetDescriptor {
    /// Creates a descriptor for the given mod-relative path.
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// The mod-relative path, e.g. `Textures/Npc/Slime.png`.
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl From<&str> for AssetDescriptor {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

/// A file as reported by the build host, before eligibility is decided.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetItem {
    /// Raw value of the `Pack` metadata, if the host set one.
    pub pack: Option<String>,
    /// Raw value of the `ModPath` metadata, if the host set one.
    pub mod_path: Option<String>,
}

impl AssetItem {
    /// An item flagged for packing under `mod_path`.
    pub fn packed(mod_path: impl Into<String>) -> Self {
        Self {
            pack: Some("true".to_string()),
            mod_path: Some(mod_path.into()),
        }
    }

    /// Returns the descriptor for this item if it takes part in generation.
    ///
    /// An item is eligible when its `Pack` flag parses as `true` and it has a
    /// logical path. Unparsable flags count as "not packed".
    pub fn descriptor(&self) -> Option<AssetDescriptor> {
        let packed = self.pack.as_deref().and_then(parse_flag).unwrap_or(false);
        if !packed {
            return None;
        }
        self.mod_path.as_deref().map(AssetDescriptor::new)
    }
}

/// Filters `items` down to the descriptors eligible for generation.
pub fn eligible_descriptors<'a>(
    items: impl IntoIterator<Item = &'a AssetItem>,
) -> Vec<AssetDescriptor> {
    items.into_iter().filter_map(AssetItem::descriptor).collect()
}
