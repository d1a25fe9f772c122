//! Go code generation for genbuilder.
//!
//! Turns a [`TypeSpec`](genbuilder_core::TypeSpec) into two Go source files: a
//! mutable builder with chainable setters and an immutable value type with
//! getters, each convertible into the other.

mod error;
mod formatter;
mod generator;
mod go_file;
mod imports;
mod naming;

pub mod ast;
pub mod files;
pub mod pipeline;

pub use error::Error;
pub use formatter::{Formatter, FormatterError};
pub use generator::Generator;
pub use genbuilder_codegen::{FormatWarning, GenerateResult, LanguageCodegen, PreviewFile};
pub use go_file::{GoFile, ImportDecl};
pub use imports::{ResolvedImports, resolve_imports};
pub use naming::{GoField, GoType};
pub use pipeline::{generate_builder, generate_immutable, validate, validate_all};
