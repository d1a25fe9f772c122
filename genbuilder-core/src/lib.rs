//! Core utilities and types for the genbuilder Go builder generator.
//!
//! This crate provides fundamental types and utilities used across
//! the genbuilder crates.

mod file;
mod ident;
mod naming;
mod types;

// File operations
pub use file::{File, FileRules, GeneratedFile, Overwrite, WriteResult};
// Identifier rules
pub use ident::{GO_KEYWORDS, is_go_keyword, type_qualifiers, validate_identifier};
// Casing utilities
pub use naming::{NamingError, receiver_name, to_public, to_private};
// Fundamental types
pub use types::{FieldDescriptor, Import, TypeSpec};

/// Header placed at the top of every generated Go file.
///
/// Follows the convention recognized by Go tooling (`^// Code generated .* DO NOT EDIT\.$`).
pub const GENERATED_HEADER: &str = "// Code generated by genbuilder. DO NOT EDIT.";
