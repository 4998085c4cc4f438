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

//! Turns resolved candidates into accessor declarations and source text.

mod template;

pub use template::*;

use crate::config::ContainerSpec;
use crate::diagnostic::{Diagnostic, Diagnostics};
use crate::naming::{check_identifier, NameCandidate};
use thiserror::Error;

/// An error raised while writing the generated unit.
#[derive(Debug, Error)]
pub enum EmitError {
    /// The template failed to write into the output buffer.
    #[error("failed to render generated source")]
    Format(#[from] std::fmt::Error),
}

/// One accessor of the generated container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessorSpec {
    /// The member name, as it appears in generated code.
    pub name: String,
    /// The path the accessor reads, prefix included.
    pub asset_path: String,
    /// The logical path of the asset, without prefix.
    pub source_path: String,
}

/// A rendered source unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSource {
    /// Suggested file name, e.g. `ModAsset.g.cs`.
    pub file_name: String,
    /// The full text of the unit.
    pub text: String,
}

/// Re-validates resolved candidates and builds their accessors.
///
/// Disambiguation only adds directory names, and those may be invalid or
/// digit-led, so every survivor is checked again. A rejected candidate is
/// reported and skipped on its own; the rest of the batch is unaffected.
/// Names for which `is_reserved` returns `true` clash with the container's own
/// members and are reported the same way. The order of `candidates` is kept.
pub fn collect_accessors(
    candidates: Vec<NameCandidate>,
    prefix: &str,
    is_reserved: impl Fn(&str) -> bool,
    diagnostics: &mut Diagnostics,
) -> Vec<AccessorSpec> {
    let mut accessors = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        if let Err(reason) = check_identifier(candidate.identifier()) {
            diagnostics.report(Diagnostic::invalid_identifier(
                candidate.path(),
                candidate.identifier(),
                reason,
            ));
            continue;
        }

        if is_reserved(candidate.symbol()) {
            diagnostics.report(Diagnostic::reserved_name(
                candidate.path(),
                candidate.symbol(),
            ));
            continue;
        }

        accessors.push(AccessorSpec {
            name: candidate.symbol().to_string(),
            asset_path: format!("{prefix}{}", candidate.path()),
            source_path: candidate.path().to_string(),
        });
    }

    accessors
}

/// Renders the container and its accessors with `template`.
///
/// The container is always complete, even when `accessors` is empty.
pub fn render<T: SourceTemplate + ?Sized>(
    template: &T,
    container: &ContainerSpec,
    accessors: &[AccessorSpec],
) -> Result<GeneratedSource, EmitError> {
    let mut text = String::new();
    template.begin(&mut text, container)?;
    for accessor in accessors {
        template.accessor(&mut text, accessor)?;
    }
    template.end(&mut text, container)?;

    Ok(GeneratedSource {
        file_name: template.file_name(container),
        text,
    })
}
