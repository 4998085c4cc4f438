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

//! Generator settings.
//!
//! Settings come either from a deserialized table (e.g. the `[generator]`
//! section of `Assets.toml`) or from string build properties. Both paths are
//! forgiving: a malformed value falls back to its default with a warning
//! instead of failing the build.

use serde::de::{Deserializer, IgnoredAny};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

/// Default name of the generated container type.
pub const DEFAULT_TYPE_NAME: &str = "ModAsset";

/// Parses a boolean flag the way build systems write them.
///
/// Accepts `true`/`false` in any case, surrounded by whitespace. Anything else
/// yields `None`.
pub fn parse_flag(value: &str) -> Option<bool> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// A read-only view over string build properties.
pub trait BuildProperties {
    /// Returns the value of the property `name`, if it is set.
    fn property(&self, name: &str) -> Option<&str>;
}

impl BuildProperties for HashMap<String, String> {
    fn property(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl BuildProperties for BTreeMap<String, String> {
    fn property(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

/// Everything the generator needs to know besides the assets themselves.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// When `false`, generation is skipped entirely.
    #[serde(deserialize_with = "lenient_enabled")]
    pub enabled: bool,
    /// Name of the mod owning the assets. Defaults to the build's crate or
    /// assembly name.
    pub mod_name: Option<String>,
    /// Root namespace of the project. Defaults to the mod name.
    pub root_namespace: Option<String>,
    /// Name of the generated container type.
    pub type_name: String,
    /// Namespace of the generated container. Defaults to the root namespace.
    pub namespace: Option<String>,
    /// Prepended to every asset path in the generated accessors.
    pub prefix: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            mod_name: None,
            root_namespace: None,
            type_name: DEFAULT_TYPE_NAME.to_string(),
            namespace: None,
            prefix: String::new(),
        }
    }
}

/// The container a run emits into, with every fallback applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerSpec {
    /// Name of the mod whose asset repository backs the accessors.
    pub mod_name: String,
    /// Namespace of the generated type.
    pub namespace: String,
    /// Name of the generated type.
    pub type_name: String,
}

impl GeneratorConfig {
    /// Reads the configuration from string build properties.
    ///
    /// | Property              | Field            |
    /// |-----------------------|------------------|
    /// | `EnablePathGenerator` | `enabled`        |
    /// | `ModName`             | `mod_name`       |
    /// | `RootNamespace`       | `root_namespace` |
    /// | `PathTypeName`        | `type_name`      |
    /// | `PathNamespace`       | `namespace`      |
    /// | `PathPrefix`          | `prefix`         |
    pub fn from_properties<P: BuildProperties + ?Sized>(properties: &P) -> Self {
        let defaults = Self::default();
        let owned = |name: &str| properties.property(name).map(str::to_string);

        let enabled = match properties.property("EnablePathGenerator") {
            Some(raw) => parse_flag(raw).unwrap_or_else(|| {
                log::warn!(
                    "EnablePathGenerator has unrecognised value '{raw}', using default '{}'",
                    defaults.enabled
                );
                defaults.enabled
            }),
            None => defaults.enabled,
        };

        Self {
            enabled,
            mod_name: owned("ModName"),
            root_namespace: owned("RootNamespace"),
            type_name: owned("PathTypeName").unwrap_or(defaults.type_name),
            namespace: owned("PathNamespace"),
            prefix: owned("PathPrefix").unwrap_or(defaults.prefix),
        }
    }

    /// Returns the prefix with a trailing `/`, or an empty string.
    pub fn normalized_prefix(&self) -> String {
        let mut prefix = self.prefix.clone();
        if !prefix.is_empty() && !prefix.ends_with('/') {
            prefix.push('/');
        }
        prefix
    }

    /// Resolves the generated container, using `default_mod_name` when no mod
    /// name is configured.
    pub fn container(&self, default_mod_name: &str) -> ContainerSpec {
        let mod_name = self
            .mod_name
            .clone()
            .unwrap_or_else(|| default_mod_name.to_string());
        let root_namespace = self
            .root_namespace
            .clone()
            .unwrap_or_else(|| mod_name.clone());
        let namespace = self.namespace.clone().unwrap_or(root_namespace);

        ContainerSpec {
            mod_name,
            namespace,
            type_name: self.type_name.clone(),
        }
    }
}

/// Accepts a boolean, or a string holding one; anything else keeps the default.
fn lenient_enabled<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawFlag {
        Bool(bool),
        Text(String),
        Other(IgnoredAny),
    }

    let default = GeneratorConfig::default().enabled;
    let enabled = match RawFlag::deserialize(deserializer)? {
        RawFlag::Bool(value) => value,
        RawFlag::Text(text) => parse_flag(&text).unwrap_or_else(|| {
            log::warn!("`enabled` has unrecognised value '{text}', using default '{default}'");
            default
        }),
        RawFlag::Other(_) => {
            log::warn!("`enabled` is not a boolean, using default '{default}'");
            default
        }
    };
    Ok(enabled)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn properties(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert!(config.enabled);
        assert_eq!(config.type_name, "ModAsset");
        assert_eq!(config.normalized_prefix(), "");
    }

    #[test]
    fn test_prefix_gets_trailing_slash() {
        let config = GeneratorConfig {
            prefix: "Assets".to_string(),
            ..Default::default()
        };
        assert_eq!(config.normalized_prefix(), "Assets/");

        let config = GeneratorConfig {
            prefix: "Assets/".to_string(),
            ..Default::default()
        };
        assert_eq!(config.normalized_prefix(), "Assets/");
    }

    #[test]
    fn test_container_fallback_chain() {
        let config = GeneratorConfig::default();
        let container = config.container("ExampleMod");
        assert_eq!(container.mod_name, "ExampleMod");
        assert_eq!(container.namespace, "ExampleMod");

        let config = GeneratorConfig {
            root_namespace: Some("ExampleMod.Content".to_string()),
            ..Default::default()
        };
        assert_eq!(config.container("ExampleMod").namespace, "ExampleMod.Content");

        let config = GeneratorConfig {
            root_namespace: Some("ExampleMod.Content".to_string()),
            namespace: Some("ExampleMod.Generated".to_string()),
            ..Default::default()
        };
        assert_eq!(config.container("ExampleMod").namespace, "ExampleMod.Generated");
    }

    #[test]
    fn test_from_properties() {
        let config = GeneratorConfig::from_properties(&properties(&[
            ("EnablePathGenerator", "false"),
            ("ModName", "ExampleMod"),
            ("PathTypeName", "Assets"),
            ("PathPrefix", "Content"),
        ]));

        assert!(!config.enabled);
        assert_eq!(config.mod_name.as_deref(), Some("ExampleMod"));
        assert_eq!(config.type_name, "Assets");
        assert_eq!(config.normalized_prefix(), "Content/");
    }

    #[test]
    fn test_malformed_flag_keeps_default() {
        let config =
            GeneratorConfig::from_properties(&properties(&[("EnablePathGenerator", "yes please")]));
        assert!(config.enabled);
        assert_eq!(parse_flag(" TRUE "), Some(true));
        assert_eq!(parse_flag("1"), None);
    }
}
