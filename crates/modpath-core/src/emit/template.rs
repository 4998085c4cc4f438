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

use super::AccessorSpec;
use crate::config::ContainerSpec;
use std::fmt::{self, Write};

/// The textual shape of a generated unit.
///
/// A template owns everything target-specific: file naming, the container
/// declaration, how an accessor loads its asset, and which member names the
/// container already uses for itself. Naming and conflict resolution never
/// look at the template.
pub trait SourceTemplate {
    /// File name of the generated unit.
    fn file_name(&self, container: &ContainerSpec) -> String;

    /// Writes everything that precedes the first accessor.
    fn begin(&self, out: &mut String, container: &ContainerSpec) -> fmt::Result;

    /// Writes one accessor.
    fn accessor(&self, out: &mut String, accessor: &AccessorSpec) -> fmt::Result;

    /// Writes everything that follows the last accessor.
    fn end(&self, out: &mut String, container: &ContainerSpec) -> fmt::Result;

    /// Returns `true` if `name` is taken by the container itself.
    fn is_reserved(&self, _name: &str, _container: &ContainerSpec) -> bool {
        false
    }
}

/// Name of the private field holding the mod's asset repository.
const REPOSITORY_FIELD: &str = "_repo";

/// C# keywords; members with these names are written with an `@` prefix.
const CSHARP_KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

/// A static C# class exposing the assets of a tModLoader mod.
///
/// Textures, effects and sounds become lazily requested `Asset<T>` properties;
/// every other file becomes a path constant.
#[derive(Debug, Clone, Copy, Default)]
pub struct CSharpTemplate;

impl CSharpTemplate {
    /// The XNA asset type loaded for `path`, judged by its extension.
    pub fn asset_type(path: &str) -> Option<&'static str> {
        let file_name = path.rsplit(['/', '\\']).next().unwrap_or(path);
        let (_, extension) = file_name.rsplit_once('.')?;
        match extension.to_ascii_lowercase().as_str() {
            "png" => Some("Texture2D"),
            "fx" => Some("Effect"),
            "ogg" | "wav" | "mp3" => Some("SoundEffect"),
            _ => None,
        }
    }

    fn member_name(name: &str) -> String {
        if CSHARP_KEYWORDS.contains(&name) {
            format!("@{name}")
        } else {
            name.to_string()
        }
    }
}

/// Quotes `value` as a C# verbatim string, keeping backslashes as written.
fn verbatim(value: &str) -> String {
    format!("@\"{}\"", value.replace('"', "\"\""))
}

impl SourceTemplate for CSharpTemplate {
    fn file_name(&self, container: &ContainerSpec) -> String {
        format!("{}.g.cs", container.type_name)
    }

    fn begin(&self, out: &mut String, container: &ContainerSpec) -> fmt::Result {
        let type_name = &container.type_name;
        writeln!(out, "// <auto-generated/>")?;
        writeln!(out, "using Microsoft.Xna.Framework.Audio;")?;
        writeln!(out, "using Microsoft.Xna.Framework.Graphics;")?;
        writeln!(out, "using ReLogic.Content;")?;
        writeln!(out, "using Terraria.ModLoader;")?;
        writeln!(out)?;
        writeln!(out, "namespace {};", container.namespace)?;
        writeln!(out)?;
        writeln!(out, "public static class {type_name}")?;
        writeln!(out, "{{")?;
        writeln!(out, "    private static readonly AssetRepository {REPOSITORY_FIELD};")?;
        writeln!(out)?;
        writeln!(out, "    static {type_name}()")?;
        writeln!(out, "    {{")?;
        writeln!(
            out,
            "        {REPOSITORY_FIELD} = ModLoader.GetMod({}).Assets;",
            verbatim(&container.mod_name)
        )?;
        writeln!(out, "    }}")?;
        writeln!(out)
    }

    fn accessor(&self, out: &mut String, accessor: &AccessorSpec) -> fmt::Result {
        let name = Self::member_name(&accessor.name);
        let path = verbatim(&accessor.asset_path);
        match Self::asset_type(&accessor.source_path) {
            Some(asset_type) => writeln!(
                out,
                "    public static Asset<{asset_type}> {name} => \
                 {REPOSITORY_FIELD}.Request<{asset_type}>({path}, AssetRequestMode.ImmediateLoad);"
            ),
            None => writeln!(out, "    public const string {name} = {path};"),
        }
    }

    fn end(&self, out: &mut String, _container: &ContainerSpec) -> fmt::Result {
        writeln!(out, "}}")
    }

    fn is_reserved(&self, name: &str, container: &ContainerSpec) -> bool {
        name == REPOSITORY_FIELD || name == container.type_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn container() -> ContainerSpec {
        ContainerSpec {
            mod_name: "ExampleMod".to_string(),
            namespace: "ExampleMod".to_string(),
            type_name: "ModAsset".to_string(),
        }
    }

    fn accessor(name: &str, path: &str) -> AccessorSpec {
        AccessorSpec {
            name: name.to_string(),
            asset_path: path.to_string(),
            source_path: path.to_string(),
        }
    }

    #[test]
    fn test_asset_type_by_extension() {
        assert_eq!(CSharpTemplate::asset_type("Items/Sword.png"), Some("Texture2D"));
        assert_eq!(CSharpTemplate::asset_type("Effects/Glow.FX"), Some("Effect"));
        assert_eq!(CSharpTemplate::asset_type("Sounds/Hit.ogg"), Some("SoundEffect"));
        assert_eq!(CSharpTemplate::asset_type("Docs/Readme.txt"), None);
        assert_eq!(CSharpTemplate::asset_type("Docs.v2/Readme"), None);
        assert_eq!(CSharpTemplate::asset_type("Docs.v2\\Readme"), None);
        assert_eq!(CSharpTemplate::asset_type("Sounds\\Hit.wav"), Some("SoundEffect"));
    }

    #[test]
    fn test_texture_accessor() {
        let mut out = String::new();
        CSharpTemplate
            .accessor(&mut out, &accessor("Sword", "Items/Sword.png"))
            .unwrap();
        assert_eq!(
            out,
            "    public static Asset<Texture2D> Sword => \
             _repo.Request<Texture2D>(@\"Items/Sword.png\", AssetRequestMode.ImmediateLoad);\n"
        );
    }

    #[test]
    fn test_plain_file_becomes_constant() {
        let mut out = String::new();
        CSharpTemplate
            .accessor(&mut out, &accessor("Readme", "Docs\\Readme.txt"))
            .unwrap();
        assert_eq!(out, "    public const string Readme = @\"Docs\\Readme.txt\";\n");
    }

    #[test]
    fn test_keyword_names_are_escaped() {
        let mut out = String::new();
        CSharpTemplate
            .accessor(&mut out, &accessor("class", "Npc/class.txt"))
            .unwrap();
        assert!(out.contains("public const string @class ="));
    }

    #[test]
    fn test_container_members_are_reserved() {
        assert!(CSharpTemplate.is_reserved("_repo", &container()));
        assert!(CSharpTemplate.is_reserved("ModAsset", &container()));
        assert!(!CSharpTemplate.is_reserved("Sword", &container()));
    }

    #[test]
    fn test_empty_container_is_complete() {
        let mut out = String::new();
        CSharpTemplate.begin(&mut out, &container()).unwrap();
        CSharpTemplate.end(&mut out, &container()).unwrap();

        assert!(out.starts_with("// <auto-generated/>\n"));
        assert!(out.contains("namespace ExampleMod;"));
        assert!(out.contains("_repo = ModLoader.GetMod(@\"ExampleMod\").Assets;"));
        assert_eq!(out.matches('{').count(), out.matches('}').count());
        assert!(out.ends_with("}\n"));
    }
}
