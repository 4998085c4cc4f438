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

//! The end-to-end pipeline: scan, resolve, emit.

use crate::config::GeneratorConfig;
use crate::descriptor::{eligible_descriptors, AssetDescriptor, AssetItem};
use crate::diagnostic::{Diagnostic, Diagnostics};
use crate::emit::{collect_accessors, render, AccessorSpec, EmitError, GeneratedSource, SourceTemplate};
use crate::resolve::resolve_conflicts;
use crate::scan::scan;

/// Resolved accessors of a run, plus everything that was left out.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Accessors in path order, with pairwise distinct names.
    pub accessors: Vec<AccessorSpec>,
    /// One entry per asset that did not make it into `accessors`.
    pub diagnostics: Vec<Diagnostic>,
}

/// The output of [`generate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    /// The rendered unit.
    pub source: GeneratedSource,
    /// Assets left out of the unit, and why.
    pub diagnostics: Vec<Diagnostic>,
}

fn run(
    descriptors: &[AssetDescriptor],
    config: &GeneratorConfig,
    is_reserved: impl Fn(&str) -> bool,
) -> Resolution {
    let mut diagnostics = Diagnostics::new();

    let scanned = scan(descriptors, &mut diagnostics);
    log::debug!(
        "Scanned {} assets: {} unique, {} conflict groups",
        descriptors.len(),
        scanned.unique.len(),
        scanned.conflicts.len()
    );

    let resolved = resolve_conflicts(scanned, &mut diagnostics);
    let accessors = collect_accessors(
        resolved.into_sorted(),
        &config.normalized_prefix(),
        is_reserved,
        &mut diagnostics,
    );

    Resolution {
        accessors,
        diagnostics: diagnostics.into_vec(),
    }
}

/// Assigns a unique, valid accessor name to each descriptor.
///
/// This is the pure core of the generator: no template, no I/O. The result
/// depends only on the set of paths, not on their order. `config.enabled` is
/// not consulted here; see [`generate`].
pub fn resolve_names(descriptors: &[AssetDescriptor], config: &GeneratorConfig) -> Resolution {
    run(descriptors, config, |_| false)
}

/// Runs the whole generator over the host's items.
///
/// Returns `Ok(None)` when generation is disabled. Otherwise the returned unit
/// is always complete, possibly with fewer accessors than eligible items;
/// the missing ones are listed in [`Generation::diagnostics`].
///
/// # Errors
/// Returns an [`EmitError`] only if the template fails to write.
pub fn generate<T: SourceTemplate + ?Sized>(
    items: &[AssetItem],
    config: &GeneratorConfig,
    default_mod_name: &str,
    template: &T,
) -> Result<Option<Generation>, EmitError> {
    if !config.enabled {
        log::info!("Asset accessor generation is disabled");
        return Ok(None);
    }

    let container = config.container(default_mod_name);
    let descriptors = eligible_descriptors(items);
    let resolution = run(&descriptors, config, |name| {
        template.is_reserved(name, &container)
    });

    let source = render(template, &container, &resolution.accessors)?;
    log::info!(
        "Generated {} with {} accessors ({} assets left out)",
        source.file_name,
        resolution.accessors.len(),
        resolution.diagnostics.len()
    );

    Ok(Some(Generation {
        source,
        diagnostics: resolution.diagnostics,
    }))
}
