//! Schema parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::{DEFAULT_SCHEMA_FILE, Schema, validate::validate_schema};
use crate::{Error, Result, SourceContext};

impl FromStr for Schema {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_toml(s, DEFAULT_SCHEMA_FILE)
    }
}

impl Schema {
    /// Parse TOML with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_toml(content, filename)
    }

    /// Parse JSON with a custom filename for error reporting.
    pub fn from_json_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let source = SourceContext::new(content, filename);
        let schema: Schema =
            serde_json::from_str(content).map_err(|e| source.json_parse_error(e))?;
        validate_schema(&schema, &source)?;
        Ok(schema)
    }

    /// Parse JSON for `.json` paths and TOML otherwise.
    pub(crate) fn from_str_for_path(content: &str, path: &Path) -> Result<Self> {
        let filename = path.display().to_string();
        if is_json(path) {
            Self::from_json_str_with_filename(content, &filename)
        } else {
            Self::from_str_with_filename(content, &filename)
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Parse a TOML schema from content with the given filename for error reporting.
fn parse_toml(content: &str, filename: &str) -> Result<Schema> {
    let source = SourceContext::new(content, filename);
    let schema: Schema = toml::from_str(content).map_err(|e| source.parse_error(e))?;
    validate_schema(&schema, &source)?;
    Ok(schema)
}
