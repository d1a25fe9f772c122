use std::path::{Path, PathBuf};

use super::{SAMPLE_SCHEMA, Schema};
use crate::{Error, Result};

/// A schema file with both raw content and parsed schema.
pub struct SchemaFile {
    path: PathBuf,
    content: String,
    schema: Schema,
}

impl SchemaFile {
    /// Open and parse a schema file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let schema = Schema::from_str_for_path(&content, &path)?;

        Ok(Self {
            path,
            content,
            schema,
        })
    }

    /// Starter schema written by `genbuilder init`.
    pub fn sample() -> &'static str {
        SAMPLE_SCHEMA
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed schema.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }
}
