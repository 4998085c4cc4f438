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

use crate::commands::assets_config::AssetManifest;
use crate::helpers::*;
use anyhow::{Context, Result};
use modpath_core::{
    generate as generate_unit, resolve_names, AssetItem, CSharpTemplate, Diagnostic,
};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Fallback mod name when neither the manifest nor its directory provide one.
const FALLBACK_MOD_NAME: &str = "Mod";

/// Scans the assets, resolves their names and writes the generated unit.
///
/// Returns the path of the written file, or `None` if generation is disabled.
pub fn generate(manifest_path: &Path, out_dir: Option<PathBuf>) -> Result<Option<PathBuf>> {
    print_task_start("Generating Asset Accessors", GEAR, MAGENTA);

    let manifest = load_manifest(manifest_path)?;
    let root = manifest_root(manifest_path);
    let items = collect_items(&manifest, &root)?;
    println!(
        "{}🔎 Found:{} {} asset files, {} flagged for packing.",
        BOLD,
        RESET,
        items.len(),
        items.iter().filter(|item| item.descriptor().is_some()).count()
    );

    let mod_name = default_mod_name(&root);
    let Some(generation) =
        generate_unit(&items, &manifest.generator, &mod_name, &CSharpTemplate)
            .context("Failed to render the generated asset class")?
    else {
        print_info("Generation is disabled in the manifest. Nothing to do.");
        return Ok(None);
    };

    report_diagnostics(&generation.diagnostics);

    let out_dir = out_dir.unwrap_or_else(|| root.join(&manifest.output_directory));
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("Failed to create output directory '{}'", out_dir.display()))?;
    let out_path = out_dir.join(&generation.source.file_name);
    fs::write(&out_path, &generation.source.text)
        .with_context(|| format!("Failed to write generated file to '{}'", out_path.display()))?;

    print_success(&format!("Wrote '{}'", out_path.display()));
    Ok(Some(out_path))
}

/// Prints the resolved name of every packed asset without writing anything.
pub fn names(manifest_path: &Path) -> Result<()> {
    print_task_start("Resolving Asset Names", MAGNIFIER, CYAN);

    let manifest = load_manifest(manifest_path)?;
    let root = manifest_root(manifest_path);
    let items = collect_items(&manifest, &root)?;
    let descriptors = modpath_core::descriptor::eligible_descriptors(&items);
    let resolution = resolve_names(&descriptors, &manifest.generator);

    let width = resolution
        .accessors
        .iter()
        .map(|accessor| accessor.name.len())
        .max()
        .unwrap_or(0);
    for accessor in &resolution.accessors {
        println!(
            "  {}{:<width$}{} {}",
            BOLD, accessor.name, RESET, accessor.asset_path
        );
    }

    report_diagnostics(&resolution.diagnostics);
    print_success(&format!("{} names resolved", resolution.accessors.len()));
    Ok(())
}

fn report_diagnostics(diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        print_warning(&diagnostic.to_string());
    }
    if !diagnostics.is_empty() {
        print_warning(&format!(
            "{} assets were left out of the generated class",
            diagnostics.len()
        ));
    }
}

/// Directory that relative manifest paths are resolved against.
fn manifest_root(manifest_path: &Path) -> PathBuf {
    match manifest_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Names the mod after the directory holding the manifest.
fn default_mod_name(root: &Path) -> String {
    fs::canonicalize(root)
        .ok()
        .as_deref()
        .and_then(Path::file_name)
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| FALLBACK_MOD_NAME.to_string())
}

/// Loads the `Assets.toml` manifest.
/// If the file does not exist, it returns the default configuration.
fn load_manifest(manifest_path: &Path) -> Result<AssetManifest> {
    let manifest: AssetManifest = if manifest_path.exists() {
        print_info(&format!(
            "Found '{}'. Loading configuration.",
            manifest_path.display()
        ));
        let manifest_str = fs::read_to_string(manifest_path).with_context(|| {
            format!(
                "Failed to read manifest file at '{}'",
                manifest_path.display()
            )
        })?;
        toml::from_str(&manifest_str)
            .with_context(|| format!("Failed to parse TOML from '{}'", manifest_path.display()))?
    } else {
        print_info(&format!(
            "No '{}' found. Using default configuration.",
            manifest_path.display()
        ));
        AssetManifest::default()
    };

    Ok(manifest)
}

/// Walks the source directories and reports every file as an asset item.
///
/// The logical path of a file is its path relative to its source directory,
/// joined with `/`. Files whose extension is listed in the manifest are
/// flagged for packing; the others are reported unflagged.
fn collect_items(manifest: &AssetManifest, root: &Path) -> Result<Vec<AssetItem>> {
    let mut items = Vec::new();

    for source_dir in &manifest.source_directories {
        let source_dir = root.join(source_dir);
        if !source_dir.is_dir() {
            print_error(&format!(
                "Source directory '{}' does not exist, skipping.",
                source_dir.display()
            ));
            continue;
        }

        let walker = WalkDir::new(&source_dir)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                entry.depth() == 0
                    || !entry.file_type().is_dir()
                    || !entry
                        .file_name()
                        .to_str()
                        .is_some_and(|name| manifest.excludes(name))
            });

        for entry in walker {
            let entry = entry.with_context(|| {
                format!("Failed to walk source directory '{}'", source_dir.display())
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let Some(mod_path) = logical_path(entry.path(), &source_dir) else {
                log::warn!("Skipping '{}': path is not valid UTF-8", entry.path().display());
                continue;
            };
            let packed = entry
                .path()
                .extension()
                .and_then(|extension| extension.to_str())
                .is_some_and(|extension| manifest.packs_extension(extension));

            items.push(AssetItem {
                pack: Some(packed.to_string()),
                mod_path: Some(mod_path),
            });
        }
    }

    Ok(items)
}

/// `path` relative to `base`, with `/` separators.
fn logical_path(path: &Path, base: &Path) -> Option<String> {
    let relative = path.strip_prefix(base).ok()?;
    let segments = relative
        .components()
        .map(|component| component.as_os_str().to_str())
        .collect::<Option<Vec<_>>>()?;
    Some(segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn touch(root: &Path, relative: &str) -> Result<()> {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, b"")?;
        Ok(())
    }

    #[test]
    fn test_logical_path_uses_forward_slashes() {
        let base = Path::new("mod");
        let path = base.join("Items").join("Boss").join("Sword.png");
        assert_eq!(
            logical_path(&path, base).as_deref(),
            Some("Items/Boss/Sword.png")
        );
    }

    #[test]
    fn test_collect_items_flags_by_extension_and_skips_excluded() -> Result<()> {
        let dir = tempdir()?;
        touch(dir.path(), "Items/Sword.png")?;
        touch(dir.path(), "Items/Sword.psd")?;
        touch(dir.path(), "bin/Cache.png")?;

        let manifest = AssetManifest::default();
        let items = collect_items(&manifest, dir.path())?;

        let packed: Vec<_> = items
            .iter()
            .filter_map(AssetItem::descriptor)
            .map(|d| d.path().to_string())
            .collect();
        assert_eq!(packed, vec!["Items/Sword.png"]);
        assert_eq!(items.len(), 2);
        Ok(())
    }

    #[test]
    fn test_generate_writes_class_next_to_manifest() -> Result<()> {
        let dir = tempdir()?;
        touch(dir.path(), "Assets/Items/Sword.png")?;
        touch(dir.path(), "Assets/Items/Boss/Sword.png")?;
        touch(dir.path(), "Assets/Bad Name.png")?;
        fs::write(
            dir.path().join("Assets.toml"),
            r#"
            source_directories = ["Assets"]

            [generator]
            mod_name = "ExampleMod"
            type_name = "ExampleAssets"
            "#,
        )?;

        let written = generate(&dir.path().join("Assets.toml"), None)?
            .expect("generation is enabled");
        assert_eq!(
            written,
            dir.path().join("generated").join("ExampleAssets.g.cs")
        );

        let text = fs::read_to_string(written)?;
        assert!(text.contains("namespace ExampleMod;"));
        assert!(text.contains(" Items_Sword => "));
        assert!(text.contains(" Boss_Sword => "));
        assert!(!text.contains("Bad Name"));
        Ok(())
    }

    #[test]
    fn test_disabled_manifest_writes_nothing() -> Result<()> {
        let dir = tempdir()?;
        touch(dir.path(), "Items/Sword.png")?;
        fs::write(
            dir.path().join("Assets.toml"),
            "[generator]\nenabled = false\n",
        )?;

        let out_dir = dir.path().join("out");
        let written = generate(&dir.path().join("Assets.toml"), Some(out_dir.clone()))?;
        assert!(written.is_none());
        assert!(!out_dir.exists());
        Ok(())
    }
}
