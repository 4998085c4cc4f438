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

use super::sanitizer::{render_identifier, SEPARATOR_PLACEHOLDER};
use thiserror::Error;

/// Raised when a candidate is asked for more specificity than its path holds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{path}' has no parent directory left above specificity level {level}")]
pub struct SpecificityExhausted {
    /// The asset path that ran out of directories.
    pub path: String,
    /// The level the candidate was already at.
    pub level: usize,
}

/// A logical asset path split into its directories and its filename stem.
struct PathSegments<'a> {
    dirs: Vec<&'a str>,
    stem: &'a str,
}

impl<'a> PathSegments<'a> {
    /// Splits on `/` and `\`, ignoring empty and `.` segments. The stem drops
    /// the last extension only, so `tile.v2.png` yields `tile.v2`.
    fn parse(path: &'a str) -> Self {
        let mut dirs: Vec<&str> = path
            .split(['/', SEPARATOR_PLACEHOLDER])
            .filter(|segment| !segment.is_empty() && *segment != ".")
            .collect();
        let file_name = dirs.pop().unwrap_or("");
        let stem = match file_name.rfind('.') {
            Some(dot) => &file_name[..dot],
            None => file_name,
        };
        Self { dirs, stem }
    }

    /// The highest level this path supports.
    fn depth(&self) -> usize {
        self.dirs.len()
    }

    /// Joins the `level` innermost directories and the stem with `_`.
    ///
    /// `level` must not exceed [`depth`](Self::depth).
    fn compose(&self, level: usize) -> String {
        let mut identifier = String::new();
        for dir in &self.dirs[self.dirs.len() - level..] {
            identifier.push_str(dir);
            identifier.push('_');
        }
        identifier.push_str(self.stem);
        identifier
    }
}

/// Computes the identifier of `path` at specificity `level`.
///
/// Level 0 is the bare filename stem; each further level prepends the next
/// enclosing directory. Returns `None` when `level` exceeds the number of
/// directories in the path.
///
/// # Examples
///
/// ```
/// use modpath_core::naming::derive_identifier;
///
/// let path = "Items/Boss/Sword.png";
/// assert_eq!(derive_identifier(path, 0).as_deref(), Some("Sword"));
/// assert_eq!(derive_identifier(path, 1).as_deref(), Some("Boss_Sword"));
/// assert_eq!(derive_identifier(path, 2).as_deref(), Some("Items_Boss_Sword"));
/// assert_eq!(derive_identifier(path, 3), None);
/// ```
pub fn derive_identifier(path: &str, level: usize) -> Option<String> {
    let segments = PathSegments::parse(path);
    (level <= segments.depth()).then(|| segments.compose(level))
}

/// An asset path together with the identifier currently proposed for it.
///
/// The identifier is always a pure function of the path and the level: a
/// candidate carries no history, and [`increase`](Self::increase) recomputes
/// the identifier from scratch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameCandidate {
    path: String,
    identifier: String,
    symbol: String,
    level: usize,
    max_level: usize,
}

impl NameCandidate {
    /// Derives the initial candidate for `path`.
    ///
    /// The identifier is the filename stem, except when the stem starts with a
    /// digit: such a name can never be emitted bare, so it is qualified with
    /// its parent directory right away (level 1). A digit-led stem without a
    /// parent directory stays at level 0 and is left for validation to reject.
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let segments = PathSegments::parse(&path);
        let max_level = segments.depth();
        let level = if segments.stem.starts_with(|ch: char| ch.is_ascii_digit()) {
            max_level.min(1)
        } else {
            0
        };
        let identifier = segments.compose(level);
        Self::from_parts(path, identifier, level, max_level)
    }

    fn from_parts(path: String, identifier: String, level: usize, max_level: usize) -> Self {
        let symbol = render_identifier(&identifier);
        Self {
            path,
            identifier,
            symbol,
            level,
            max_level,
        }
    }

    /// Returns the candidate one level more specific than `self`.
    ///
    /// # Errors
    /// Returns [`SpecificityExhausted`] when every directory of the path is
    /// already part of the identifier.
    pub fn increase(&self) -> Result<Self, SpecificityExhausted> {
        if self.is_exhausted() {
            return Err(SpecificityExhausted {
                path: self.path.clone(),
                level: self.level,
            });
        }

        let level = self.level + 1;
        let identifier = PathSegments::parse(&self.path).compose(level);
        Ok(Self::from_parts(
            self.path.clone(),
            identifier,
            level,
            self.max_level,
        ))
    }

    /// The logical asset path this candidate names.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The identifier as derived from the path, separator placeholders included.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The identifier as it will appear in generated code.
    ///
    /// Two candidates conflict when their symbols are equal, since that is
    /// what the compiler of the generated unit sees.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// How many directories are folded into the identifier.
    pub fn level(&self) -> usize {
        self.level
    }

    /// Returns `true` once the identifier spans the whole path.
    pub fn is_exhausted(&self) -> bool {
        self.level >= self.max_level
    }
}
