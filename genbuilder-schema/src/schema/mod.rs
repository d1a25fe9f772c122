//! Schema types and parsing for genbuilder.toml files.

mod file;
mod parse;
mod sample;
mod validate;

use std::path::{Component, Path, PathBuf};

use genbuilder_core::TypeSpec;
use serde::{Deserialize, Serialize};

pub use file::SchemaFile;
pub use sample::SAMPLE_SCHEMA;
pub use validate::ParseContext;

/// File name looked up when no schema path is given.
pub const DEFAULT_SCHEMA_FILE: &str = "genbuilder.toml";

/// Root schema for genbuilder.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schema {
    /// Where and how generated files are written
    pub output: OutputConfig,

    /// External formatter run on every generated file
    #[serde(default)]
    pub formatter: FormatterConfig,

    /// Value types to generate, in declaration order
    #[serde(default)]
    pub types: Vec<TypeSpec>,
}

/// The `[output]` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output directory, relative to the working directory
    pub dir: PathBuf,

    /// Go package name; defaults to the last segment of `dir`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
}

/// The `[formatter]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatterConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    #[serde(default = "default_command")]
    pub command: String,

    /// Arguments placed before the file path
    #[serde(default = "default_args")]
    pub args: Vec<String>,
}

fn default_enabled() -> bool {
    true
}

fn default_command() -> String {
    "goimports".to_string()
}

fn default_args() -> Vec<String> {
    vec!["-w".to_string()]
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            command: default_command(),
            args: default_args(),
        }
    }
}

impl Schema {
    /// The Go package every type is generated into.
    ///
    /// Falls back to the last segment of the output directory.
    pub fn package_name(&self) -> Option<String> {
        self.output
            .package
            .clone()
            .or_else(|| package_from_dir(&self.output.dir))
    }

    /// Total number of fields across all types.
    pub fn field_count(&self) -> usize {
        self.types.iter().map(|t| t.fields.len()).sum()
    }
}

/// Package name implied by an output directory: its last segment.
///
/// `..` cancels the segment before it. Paths that end up naming the current
/// directory or one of its parents (".", "a/..", "../..") imply no package
/// without looking at the filesystem.
pub fn package_from_dir(dir: &Path) -> Option<String> {
    let mut segments: Vec<Option<&str>> = Vec::new();
    for component in dir.components() {
        match component {
            Component::Normal(segment) => segments.push(segment.to_str()),
            Component::ParentDir if matches!(segments.last(), Some(Some(_))) => {
                segments.pop();
            }
            Component::ParentDir => segments.push(None),
            Component::CurDir => {}
            Component::RootDir | Component::Prefix(_) => segments.clear(),
        }
    }
    segments.last().copied().flatten().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_package_from_dir() {
        assert_eq!(package_from_dir(Path::new("builders")), Some("builders".into()));
        assert_eq!(
            package_from_dir(Path::new("./internal/models/")),
            Some("models".into())
        );
        assert_eq!(package_from_dir(Path::new(".")), None);
        assert_eq!(package_from_dir(Path::new("")), None);
        assert_eq!(package_from_dir(Path::new("/")), None);
    }

    #[test]
    fn test_package_from_dir_with_parent_segments() {
        assert_eq!(package_from_dir(Path::new("gen/out/..")), Some("gen".into()));
        assert_eq!(package_from_dir(Path::new("../models")), Some("models".into()));
        assert_eq!(package_from_dir(Path::new("gen/..")), None);
        assert_eq!(package_from_dir(Path::new("..")), None);
    }

    #[test]
    fn test_explicit_package_wins() {
        let schema = Schema::from_str(
            r#"
            [output]
            dir = "gen/out"
            package = "models"
            "#,
        )
        .expect("valid schema");
        assert_eq!(schema.package_name().as_deref(), Some("models"));
    }

    #[test]
    fn test_formatter_defaults() {
        let schema = Schema::from_str(
            r#"
            [output]
            dir = "builders"
            "#,
        )
        .expect("valid schema");
        assert_eq!(schema.formatter, FormatterConfig::default());
        assert!(schema.formatter.enabled);
        assert_eq!(schema.formatter.command, "goimports");
        assert_eq!(schema.formatter.args, vec!["-w".to_string()]);
        assert!(schema.types.is_empty());
    }

    #[test]
    fn test_partial_formatter_table() {
        let schema = Schema::from_str(
            r#"
            [output]
            dir = "builders"

            [formatter]
            command = "gofmt"
            "#,
        )
        .expect("valid schema");
        assert!(schema.formatter.enabled);
        assert_eq!(schema.formatter.command, "gofmt");
        assert_eq!(schema.formatter.args, vec!["-w".to_string()]);
    }

    #[test]
    fn test_field_count() {
        let schema = Schema::from_str(
            r#"
            [output]
            dir = "builders"

            [[types]]
            name = "Point"
            fields = [{ name = "x", type = "int" }, { name = "y", type = "int" }]

            [[types]]
            name = "Empty"
            "#,
        )
        .expect("valid schema");
        assert_eq!(schema.field_count(), 2);
    }
}
