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

//! First pass over the descriptors: initial names and collision detection.

use crate::descriptor::AssetDescriptor;
use crate::diagnostic::{Diagnostic, Diagnostics};
use crate::naming::{check_identifier, is_valid_identifier, NameCandidate};
use ahash::AHashMap;
use std::collections::BTreeMap;

/// Candidates keyed by the symbol they currently share.
///
/// Groups are ordered by key so that resolution visits them in the same order
/// on every run.
pub type ConflictGroups = BTreeMap<String, Vec<NameCandidate>>;

/// The result of [`scan`].
#[derive(Debug, Default)]
pub struct ScanOutput {
    /// Candidates whose initial symbol is not shared with any other asset.
    pub unique: AHashMap<String, NameCandidate>,
    /// Candidates that collided on their initial symbol, in path order.
    pub conflicts: ConflictGroups,
}

/// Derives the initial candidate of every descriptor and groups collisions.
///
/// Descriptors are visited in path order, not in the order given, so the
/// outcome only depends on the set of paths. A candidate whose identifier
/// contains characters outside the accepted set is reported and dropped here:
/// the stem is part of every deeper identifier too, so no amount of
/// disambiguation could make it valid.
///
/// The first time a symbol collides, the entry already in the unique map is
/// moved into a new conflict group together with the newcomer; later
/// collisions on the same symbol are appended to that group.
pub fn scan(descriptors: &[AssetDescriptor], diagnostics: &mut Diagnostics) -> ScanOutput {
    let mut ordered: Vec<&AssetDescriptor> = descriptors.iter().collect();
    ordered.sort();

    let mut output = ScanOutput::default();

    for descriptor in ordered {
        let candidate = NameCandidate::new(descriptor.path());

        if !is_valid_identifier(candidate.identifier()) {
            // `check_identifier` is stricter, so it always has a reason here.
            if let Err(reason) = check_identifier(candidate.identifier()) {
                diagnostics.report(Diagnostic::invalid_identifier(
                    candidate.path(),
                    candidate.identifier(),
                    reason,
                ));
            }
            continue;
        }

        let key = candidate.symbol().to_string();
        if let Some(group) = output.conflicts.get_mut(&key) {
            group.push(candidate);
        } else if let Some(existing) = output.unique.remove(&key) {
            log::debug!(
                "'{}' collides with '{}' on '{key}'",
                candidate.path(),
                existing.path()
            );
            output.conflicts.insert(key, vec![existing, candidate]);
        } else {
            output.unique.insert(key, candidate);
        }
    }

    output
}
