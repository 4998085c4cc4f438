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

use modpath_core::GeneratorConfig;
use serde::Deserialize;
use std::path::PathBuf;

/// Represents the structure of the `Assets.toml` manifest file.
///
/// Relative paths are resolved against the directory holding the manifest.
#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct AssetManifest {
    /// Directories to scan for assets. Logical paths are relative to these.
    pub source_directories: Vec<PathBuf>,
    /// File extensions (without the dot) that are flagged for packing.
    pub pack_extensions: Vec<String>,
    /// Directory names skipped while scanning.
    pub exclude: Vec<String>,
    /// Where the generated unit is written.
    pub output_directory: PathBuf,
    /// Naming and emission settings.
    pub generator: GeneratorConfig,
}

impl Default for AssetManifest {
    /// Provides a default configuration if `Assets.toml` is not found.
    ///
    /// The default configuration scans the manifest directory itself, packs
    /// textures, effects and sounds, and writes into `generated/`.
    fn default() -> Self {
        Self {
            source_directories: vec![PathBuf::from(".")],
            pack_extensions: ["png", "fx", "ogg", "wav", "mp3"]
                .into_iter()
                .map(String::from)
                .collect(),
            exclude: ["bin", "obj", "target", "generated", ".git"]
                .into_iter()
                .map(String::from)
                .collect(),
            output_directory: PathBuf::from("generated"),
            generator: GeneratorConfig::default(),
        }
    }
}

impl AssetManifest {
    /// Returns `true` if files with `extension` are packed.
    pub fn packs_extension(&self, extension: &str) -> bool {
        self.pack_extensions
            .iter()
            .any(|packed| packed.eq_ignore_ascii_case(extension))
    }

    /// Returns `true` if a directory called `name` is skipped.
    pub fn excludes(&self, name: &str) -> bool {
        self.exclude.iter().any(|excluded| excluded == name)
    }
}
