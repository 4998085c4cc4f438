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

//! Identifier derivation for asset paths.
//!
//! This module is the "common language" of the generator: how a path is split
//! into segments, how many of those segments an identifier folds in, and which
//! identifiers are acceptable in generated code. It has no knowledge of
//! conflict groups or of the emitted template.

mod candidate;
mod sanitizer;

pub use candidate::*;
pub use sanitizer::*;
