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

use thiserror::Error;

/// The path separator of Windows hosts.
///
/// Paths are split on it just like on `/`. It stays in the accepted character
/// set, and should it reach an identifier the emitter renders it as `_`.
pub const SEPARATOR_PLACEHOLDER: char = '\\';

/// The reason an identifier was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    /// The identifier has no characters at all.
    #[error("identifier is empty")]
    Empty,
    /// The identifier contains a character outside `[A-Za-z0-9_\\]`.
    #[error("character {ch:?} at position {index} is not allowed in an identifier")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
        /// Its character index within the identifier.
        index: usize,
    },
    /// The identifier starts with a digit, which no target language accepts.
    #[error("identifier starts with the digit {0:?}")]
    LeadingDigit(char),
}

/// Returns `true` if `ch` may appear anywhere in an identifier.
#[inline]
pub fn is_identifier_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == SEPARATOR_PLACEHOLDER
}

/// Returns `true` if every character of `name` is an ASCII letter, an ASCII
/// digit, `_` or the separator placeholder.
///
/// The empty string is rejected. Leading digits are *not* checked here: a
/// digit-led name is still a valid candidate because disambiguation may
/// prefix it with a directory later. Use [`check_identifier`] for the full
/// emission rule.
pub fn is_valid_identifier(name: &str) -> bool {
    !name.is_empty() && name.chars().all(is_identifier_char)
}

/// Validates `name` for emission and reports why it is unusable.
///
/// On top of [`is_valid_identifier`], the first character must not be a digit.
pub fn check_identifier(name: &str) -> Result<(), IdentifierError> {
    let first = name.chars().next().ok_or(IdentifierError::Empty)?;

    if let Some((index, ch)) = name.chars().enumerate().find(|(_, ch)| !is_identifier_char(*ch)) {
        return Err(IdentifierError::InvalidCharacter { ch, index });
    }

    if first.is_ascii_digit() {
        return Err(IdentifierError::LeadingDigit(first));
    }

    Ok(())
}

/// Renders a validated identifier as it appears in generated code.
pub fn render_identifier(name: &str) -> String {
    name.replace(SEPARATOR_PLACEHOLDER, "_")
}
