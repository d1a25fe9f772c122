// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Schema files describing the Go value types genbuilder generates.

mod error;
mod schema;

pub use error::{Error, Result, SourceContext};
pub use schema::{
    DEFAULT_SCHEMA_FILE, FormatterConfig, OutputConfig, ParseContext, SAMPLE_SCHEMA, Schema,
    SchemaFile, package_from_dir,
};
