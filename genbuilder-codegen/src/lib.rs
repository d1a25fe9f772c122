//! Shared code generation utilities for genbuilder.
//!
//! This crate provides language-agnostic abstractions used by the
//! language-specific generator (`genbuilder-codegen-go`).
//!
//! # Module Organization
//!
//! - [`builder`] - Text emission (CodeBuilder, CodeFragment, Renderable)
//! - [`generation`] - Output management (ImportCollector)
//! - [`language`] - Language generator trait (LanguageCodegen, PreviewFile, etc.)

pub mod builder;
pub mod generation;
pub mod language;

pub use builder::{CodeBuilder, CodeFragment, Renderable};
pub use generation::ImportCollector;
pub use language::{FormatWarning, GenerateResult, LanguageCodegen, PreviewFile};
