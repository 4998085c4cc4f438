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

//! # Modpath Core
//!
//! Turns the packed asset files of a mod into stable, unique accessor names and
//! renders them as one generated source unit.
//!
//! The pipeline is a chain of pure stages:
//! - [`scan`]: derives a [`NameCandidate`] per asset and splits them into a
//!   unique map and conflict groups.
//! - [`resolve`]: deepens colliding names with parent directories until every
//!   group is distinct.
//! - [`emit`]: re-validates the survivors and renders them through a
//!   [`SourceTemplate`].
//!
//! [`generate`] wires the stages together and is what build tooling calls.

#![warn(missing_docs)]

pub mod config;
pub mod descriptor;
pub mod diagnostic;
pub mod emit;
pub mod generator;
pub mod naming;
pub mod resolve;
pub mod scan;

pub use config::{BuildProperties, ContainerSpec, GeneratorConfig};
pub use descriptor::{AssetDescriptor, AssetItem};
pub use diagnostic::{Diagnostic, DiagnosticKind, Diagnostics};
pub use emit::{AccessorSpec, CSharpTemplate, EmitError, GeneratedSource, SourceTemplate};
pub use generator::{generate, resolve_names, Generation, Resolution};
pub use naming::{is_valid_identifier, IdentifierError, NameCandidate, SpecificityExhausted};
