//! Language-specific abstractions.
//!
//! - [`LanguageCodegen`] - Main trait for language code generators
//! - [`GenerateResult`] - Result of code generation
//! - [`FormatWarning`] - Non-fatal formatter failure
//! - [`PreviewFile`] - Generated file preview

mod traits;

pub use traits::{FormatWarning, GenerateResult, LanguageCodegen, PreviewFile};
