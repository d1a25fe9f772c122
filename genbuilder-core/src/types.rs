//! Input model: a value type described as an ordered list of fields.

use serde::{Deserialize, Serialize};

/// One member of the source value type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Unexported member name (e.g., "integer32").
    pub name: String,
    /// Go type expression, emitted verbatim (e.g., "time.Time").
    #[serde(rename = "type")]
    pub type_name: String,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

/// A Go import declaration needed by qualified field types.
///
/// Deserializes from either a bare path (`"time"`) or a table
/// (`{ path = "github.com/jackc/pgx/v5", name = "pgx" }`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawImport")]
pub struct Import {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawImport {
    Path(String),
    Table { path: String, name: Option<String> },
}

impl From<RawImport> for Import {
    fn from(raw: RawImport) -> Self {
        match raw {
            RawImport::Path(path) => Self { path, name: None },
            RawImport::Table { path, name } => Self { path, name },
        }
    }
}

impl Import {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: None,
        }
    }

    pub fn named(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: Some(name.into()),
        }
    }

    /// The identifier the package is referenced by in Go source.
    ///
    /// An explicit alias wins. Otherwise the last path segment is used, skipping
    /// a trailing major-version segment (`/v5`) and stripping a `.vN` suffix
    /// (`gopkg.in/yaml.v3` -> `yaml`).
    pub fn package_name(&self) -> &str {
        if let Some(name) = &self.name {
            return name;
        }

        let mut segments = self.path.rsplit('/');
        let mut last = segments.next().unwrap_or(&self.path);
        if is_major_version(last) {
            if let Some(prev) = segments.next() {
                last = prev;
            }
        }

        match last.rsplit_once(".v") {
            Some((base, version))
                if !base.is_empty()
                    && !version.is_empty()
                    && version.chars().all(|c| c.is_ascii_digit()) =>
            {
                base
            }
            _ => last,
        }
    }
}

fn is_major_version(segment: &str) -> bool {
    segment
        .strip_prefix('v')
        .is_some_and(|n| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()))
}

/// The source value type: a name plus its ordered fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSpec {
    /// Immutable type name, used verbatim (e.g., "Jason").
    pub name: String,
    /// Imports available to qualified field types.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub imports: Vec<Import>,
    /// Fields in declaration order.
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
}

impl TypeSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            imports: Vec::new(),
            fields: Vec::new(),
        }
    }

    /// Append a field.
    pub fn field(mut self, name: impl Into<String>, type_name: impl Into<String>) -> Self {
        self.fields.push(FieldDescriptor::new(name, type_name));
        self
    }

    /// Add an import.
    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    pub fn has_fields(&self) -> bool {
        !self.fields.is_empty()
    }
}
