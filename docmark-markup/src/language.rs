//! Static language catalog
//!
//! Maps file extensions to the language identifiers used inside `:::code`
//! directives. The catalog is an ordered, read-only table: lookups scan it
//! front to back, so when two entries claim the same extension (`.h` is both C
//! and C++) the one declared first wins.
//!
//! Extensions are stored with their leading dot and compared exactly; no case
//! folding is done.

use serde::Serialize;
use std::path::Path;

/// One catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageDescriptor {
    /// Display name shown when the author picks a language by hand
    pub name: &'static str,
    /// Identifiers accepted by the renderer; the first one is emitted
    pub aliases: &'static [&'static str],
    pub extensions: &'static [&'static str],
}

impl LanguageDescriptor {
    /// Identifier written into directives.
    pub fn alias(&self) -> &'static str {
        self.aliases.first().copied().unwrap_or(self.name)
    }

    pub fn has_extension(&self, extension: &str) -> bool {
        self.extensions.contains(&extension)
    }
}

macro_rules! language {
    ($name:literal, [$($alias:literal),+], [$($ext:literal),*]) => {
        LanguageDescriptor {
            name: $name,
            aliases: &[$($alias),+],
            extensions: &[$($ext),*],
        }
    };
}

static CATALOG: &[LanguageDescriptor] = &[
    language!(".NET Core CLI", ["dotnetcli"], []),
    language!("1C", ["1c"], [".bsl", ".os"]),
    language!("ASP.NET", ["aspx"], [".aspx", ".ascx"]),
    language!("AzCopy", ["azcopy"], []),
    language!("Azure CLI", ["azurecli"], []),
    language!("Azure PowerShell", ["azurepowershell"], []),
    language!("Bash", ["bash", "sh", "zsh"], [".sh", ".bash", ".zsh"]),
    language!("C", ["c"], [".c", ".h"]),
    language!("C#", ["csharp", "cs"], [".cs", ".csx"]),
    language!("C++", ["cpp", "c++"], [".cpp", ".cc", ".cxx", ".hpp", ".h"]),
    language!("CSS", ["css"], [".css"]),
    language!("Dockerfile", ["dockerfile"], [".dockerfile"]),
    language!("F#", ["fsharp", "fs"], [".fs", ".fsi", ".fsx"]),
    language!("Go", ["go"], [".go"]),
    language!("HTML", ["html"], [".html", ".htm"]),
    language!("Java", ["java"], [".java"]),
    language!("JavaScript", ["javascript", "js"], [".js", ".mjs", ".cjs"]),
    language!("JSON", ["json"], [".json"]),
    language!("Kotlin", ["kotlin"], [".kt", ".kts"]),
    language!("Markdown", ["markdown", "md"], [".md", ".markdown"]),
    language!("Objective-C", ["objectivec"], [".m"]),
    language!("PHP", ["php"], [".php"]),
    language!("PowerShell", ["powershell", "ps"], [".ps1", ".psm1", ".psd1"]),
    language!("Python", ["python", "py"], [".py"]),
    language!("R", ["r"], [".r"]),
    language!("Ruby", ["ruby", "rb"], [".rb"]),
    language!("Rust", ["rust", "rs"], [".rs"]),
    language!("Scala", ["scala"], [".scala"]),
    language!("SQL", ["sql"], [".sql"]),
    language!("Swift", ["swift"], [".swift"]),
    language!("TypeScript", ["typescript", "ts"], [".ts", ".tsx"]),
    language!("VB.NET", ["vb", "vbnet"], [".vb"]),
    language!("XAML", ["xaml"], [".xaml"]),
    language!("XML", ["xml"], [".xml", ".csproj"]),
    language!("YAML", ["yaml", "yml"], [".yml", ".yaml"]),
];

/// The full catalog in declaration order.
pub fn catalog() -> &'static [LanguageDescriptor] {
    CATALOG
}

/// Find the first language that claims `extension` (including the dot).
pub fn infer_from_extension(extension: &str) -> Option<&'static LanguageDescriptor> {
    CATALOG.iter().find(|lang| lang.has_extension(extension))
}

/// Infer the language of a file from its extension.
pub fn infer_from_path(path: impl AsRef<Path>) -> Option<&'static LanguageDescriptor> {
    let extension = path.as_ref().extension()?.to_str()?;
    infer_from_extension(&format!(".{extension}"))
}

/// Look a language up by its display name.
pub fn find_by_name(name: &str) -> Option<&'static LanguageDescriptor> {
    CATALOG.iter().find(|lang| lang.name == name)
}

/// Display names, in catalog order, for manual selection.
pub fn display_names() -> Vec<String> {
    CATALOG.iter().map(|lang| lang.name.to_string()).collect()
}
