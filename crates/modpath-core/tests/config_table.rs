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

#[test]
fn test_empty_table_uses_defaults() {
    let config: GeneratorConfig = toml::from_str("").unwrap();
    assert_eq!(config, GeneratorConfig::default());
}

#[test]
fn test_full_table() {
    let config: GeneratorConfig = toml::from_str(
        r#"
        enabled = false
        mod_name = "ExampleMod"
        type_name = "Assets"
        namespace = "ExampleMod.Generated"
        prefix = "Content"
        "#,
    )
    .unwrap();

    assert!(!config.enabled);
    assert_eq!(config.mod_name.as_deref(), Some("ExampleMod"));
    assert_eq!(config.type_name, "Assets");
    assert_eq!(config.namespace.as_deref(), Some("ExampleMod.Generated"));
    assert_eq!(config.normalized_prefix(), "Content/");
}

#[test]
fn test_enabled_accepts_quoted_booleans() {
    let config: GeneratorConfig = toml::from_str(r#"enabled = "False""#).unwrap();
    assert!(!config.enabled);
}

#[test]
fn test_malformed_enabled_falls_back_to_default() {
    let config: GeneratorConfig = toml::from_str(r#"enabled = "sometimes""#).unwrap();
    assert!(config.enabled);

    let config: GeneratorConfig = toml::from_str("enabled = 0").unwrap();
    assert!(config.enabled);
}
