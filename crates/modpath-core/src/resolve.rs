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

//! Conflict resolution by iterative deepening.
//!
//! Colliding candidates are pushed toward longer, more path-qualified names.
//! After every change the whole group is compared again, so the result is
//! unique across the group and not only between the pair that last collided.
//!
//! # Termination
//!
//! A candidate's level only grows and is capped by the depth of its path.
//! Every restart of the scan either raises at least one level or removes the
//! members that can no longer move, so the loop always ends.

use crate::diagnostic::{Diagnostic, Diagnostics};
use crate::naming::NameCandidate;
use crate::scan::{ConflictGroups, ScanOutput};
use ahash::AHashMap;

/// Final identifier → candidate, with pairwise distinct keys.
#[derive(Debug, Default)]
pub struct ResolvedSet {
    entries: AHashMap<String, NameCandidate>,
}

impl ResolvedSet {
    /// Looks up the candidate that owns `symbol`.
    pub fn get(&self, symbol: &str) -> Option<&NameCandidate> {
        self.entries.get(symbol)
    }

    /// Number of resolved assets.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no asset survived.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consumes the set and returns its candidates ordered by path.
    pub fn into_sorted(self) -> Vec<NameCandidate> {
        let mut candidates: Vec<NameCandidate> = self.entries.into_values().collect();
        candidates.sort_by(|a, b| a.path().cmp(b.path()));
        candidates
    }
}

/// Raises `member` one level in place; returns `false` if it is exhausted.
fn bump(member: &mut NameCandidate) -> bool {
    match member.increase() {
        Ok(next) => {
            *member = next;
            true
        }
        Err(_) => false,
    }
}

/// Makes the symbols of one conflict group pairwise distinct.
///
/// Every member is first raised one level, since arriving in a group already
/// means its current name is taken. The group is then scanned pair by pair:
/// when member `i` matches any later members, all of them and `i` itself are
/// raised one level and the scan restarts from the top.
///
/// If every member of a match is already exhausted, their paths are identical
/// all the way to the root and no name can tell them apart. Those members are
/// removed from the group and reported as irreducible collisions.
pub fn resolve_group(
    mut members: Vec<NameCandidate>,
    diagnostics: &mut Diagnostics,
) -> Vec<NameCandidate> {
    for member in &mut members {
        bump(member);
    }

    'scan: loop {
        for i in 0..members.len().saturating_sub(1) {
            let matching: Vec<usize> = (i + 1..members.len())
                .filter(|&j| members[j].symbol() == members[i].symbol())
                .collect();
            if matching.is_empty() {
                continue;
            }

            let mut advanced = false;
            for &j in &matching {
                advanced |= bump(&mut members[j]);
            }
            advanced |= bump(&mut members[i]);

            if !advanced {
                let mut stuck = matching;
                stuck.push(i);
                report_irreducible(&mut members, stuck, diagnostics);
            }
            continue 'scan;
        }
        break;
    }

    members
}

/// Removes the members at `indices` and reports each of them.
fn report_irreducible(
    members: &mut Vec<NameCandidate>,
    mut indices: Vec<usize>,
    diagnostics: &mut Diagnostics,
) {
    indices.sort_unstable_by(|a, b| b.cmp(a));
    let mut removed: Vec<NameCandidate> = indices.into_iter().map(|i| members.remove(i)).collect();
    removed.sort_by(|a, b| a.path().cmp(b.path()));

    for (index, member) in removed.iter().enumerate() {
        let others = removed
            .iter()
            .enumerate()
            .filter(|(other, _)| *other != index)
            .map(|(_, other)| other.path().to_string())
            .collect();
        diagnostics.report(Diagnostic::irreducible_collision(
            member.path(),
            member.symbol(),
            others,
        ));
    }
}

/// Resolves every conflict group and folds the result into one set.
///
/// Groups are processed in key order. A resolved member may land on a symbol
/// that is already taken: by an asset that never collided, or by a group that
/// has not been processed yet. In the second case the member joins the pending
/// group. In the first case both are resolved again as a new group, unless the
/// owner can no longer change its name: then the owner keeps the symbol and
/// only the newcomer moves on. Either way the final set never
/// maps one symbol to two assets.
pub fn resolve_conflicts(scan: ScanOutput, diagnostics: &mut Diagnostics) -> ResolvedSet {
    let ScanOutput {
        mut unique,
        conflicts,
    } = scan;
    let mut pending: ConflictGroups = conflicts;

    while let Some((key, members)) = pending.pop_first() {
        log::debug!("Resolving {} assets sharing '{key}'", members.len());
        debug_assert!(!unique.contains_key(&key));

        for member in resolve_group(members, diagnostics) {
            place(member, &mut unique, &mut pending, diagnostics);
        }
    }

    ResolvedSet { entries: unique }
}

/// Files a resolved `member` under its symbol.
///
/// An exhausted owner of the symbol keeps it. The newcomer is raised until it
/// finds a free symbol, and is reported as an irreducible collision if it runs
/// out of directories first.
fn place(
    mut member: NameCandidate,
    unique: &mut AHashMap<String, NameCandidate>,
    pending: &mut ConflictGroups,
    diagnostics: &mut Diagnostics,
) {
    loop {
        let symbol = member.symbol().to_string();
        if let Some(group) = pending.get_mut(&symbol) {
            group.push(member);
            return;
        }

        let Some(existing) = unique.remove(&symbol) else {
            unique.insert(symbol, member);
            return;
        };
        log::debug!(
            "'{}' now collides with '{}' on '{symbol}'",
            member.path(),
            existing.path()
        );

        if !existing.is_exhausted() {
            pending.insert(symbol, vec![existing, member]);
            return;
        }

        let owner = existing.path().to_string();
        unique.insert(symbol, existing);
        match member.increase() {
            Ok(next) => member = next,
            Err(_) => {
                diagnostics.report(Diagnostic::irreducible_collision(
                    member.path(),
                    member.symbol(),
                    vec![owner],
                ));
                return;
            }
        }
    }
}
