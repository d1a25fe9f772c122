//! Core operations.
//!
//! This module contains the business logic for genbuilder commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;

pub use check::check;
pub use generate::{GenerateOptions, generate, resolve_package};
