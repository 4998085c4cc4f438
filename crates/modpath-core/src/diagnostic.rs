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

//! Per-asset problems found during generation.
//!
//! A diagnostic never stops a run: the offending asset is left out of the
//! generated unit and every other asset is still processed. How diagnostics
//! reach the user (build log, terminal, IDE) is up to the caller.

use crate::naming::IdentifierError;
use std::fmt;

/// What went wrong with a single asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// The asset's identifier is not acceptable in generated code.
    InvalidIdentifier(IdentifierError),
    /// The asset still shares its identifier with another one after every
    /// enclosing directory was folded in.
    IrreducibleCollision {
        /// Paths of the other assets in the same collision.
        with: Vec<String>,
    },
    /// The identifier is already used by the generated container itself.
    ReservedName,
}

impl DiagnosticKind {
    /// A stable code for build logs.
    pub fn code(&self) -> &'static str {
        match self {
            DiagnosticKind::InvalidIdentifier(_) => "MP0001",
            DiagnosticKind::IrreducibleCollision { .. } => "MP0002",
            DiagnosticKind::ReservedName => "MP0003",
        }
    }
}

/// A problem attached to one asset path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The category of the problem.
    pub kind: DiagnosticKind,
    /// The logical path of the asset that was left out.
    pub path: String,
    /// The identifier the asset had when it was rejected.
    pub identifier: String,
}

impl Diagnostic {
    /// Creates an invalid-identifier diagnostic.
    pub fn invalid_identifier(
        path: impl Into<String>,
        identifier: impl Into<String>,
        reason: IdentifierError,
    ) -> Self {
        Self {
            kind: DiagnosticKind::InvalidIdentifier(reason),
            path: path.into(),
            identifier: identifier.into(),
        }
    }

    /// Creates an irreducible-collision diagnostic.
    pub fn irreducible_collision(
        path: impl Into<String>,
        identifier: impl Into<String>,
        with: Vec<String>,
    ) -> Self {
        Self {
            kind: DiagnosticKind::IrreducibleCollision { with },
            path: path.into(),
            identifier: identifier.into(),
        }
    }

    /// Creates a reserved-name diagnostic.
    pub fn reserved_name(path: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::ReservedName,
            path: path.into(),
            identifier: identifier.into(),
        }
    }

    /// The stable code of this diagnostic.
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DiagnosticKind::InvalidIdentifier(reason) => write!(
                f,
                "{}: '{}' cannot be used as an asset name for '{}': {reason}",
                self.code(),
                self.identifier,
                self.path
            ),
            DiagnosticKind::IrreducibleCollision { with } => write!(
                f,
                "{}: '{}' resolves to '{}' even with its full path, same as {}",
                self.code(),
                self.path,
                self.identifier,
                with.join(", ")
            ),
            DiagnosticKind::ReservedName => write!(
                f,
                "{}: '{}' is already used by the generated container, '{}' is left out",
                self.code(),
                self.identifier,
                self.path
            ),
        }
    }
}

/// Collects the diagnostics of one run, in the order they were raised.
#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a diagnostic and mirrors it to the log.
    pub fn report(&mut self, diagnostic: Diagnostic) {
        log::warn!("{diagnostic}");
        self.entries.push(diagnostic);
    }

    /// The diagnostics recorded so far.
    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.entries
    }

    /// Number of recorded diagnostics.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing was reported.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consumes the collector.
    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_mentions_path_and_code() {
        let diagnostic = Diagnostic::invalid_identifier(
            "Bad Name.png",
            "Bad Name",
            IdentifierError::InvalidCharacter { ch: ' ', index: 3 },
        );
        let message = diagnostic.to_string();
        assert!(message.starts_with("MP0001"));
        assert!(message.contains("Bad Name.png"));
    }

    #[test]
    fn test_collector_keeps_order() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.report(Diagnostic::irreducible_collision(
            "A/X.png",
            "A_X",
            vec!["A/X.png".to_string()],
        ));
        diagnostics.report(Diagnostic::invalid_identifier(
            "1.png",
            "1",
            IdentifierError::LeadingDigit('1'),
        ));

        let codes: Vec<_> = diagnostics.as_slice().iter().map(Diagnostic::code).collect();
        assert_eq!(codes, vec!["MP0002", "MP0001"]);
        assert_eq!(diagnostics.len(), 2);
    }
}
