//! Language-agnostic code generation traits.

use std::path::Path;

use eyre::Result;

/// Trait for language-specific code generators.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "go")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "go")
    fn file_extension(&self) -> &'static str;

    /// Render every file in memory without writing to disk.
    fn preview(&self) -> Result<Vec<PreviewFile>>;

    /// Generate all files into the specified output directory.
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files written, relative to the output directory
    pub written: Vec<String>,
    /// Formatter failures; the files were still written
    pub format_warnings: Vec<FormatWarning>,
}

impl GenerateResult {
    /// Whether every written file was formatted cleanly.
    pub fn is_clean(&self) -> bool {
        self.format_warnings.is_empty()
    }
}

/// A formatter run that did not succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatWarning {
    /// Relative path of the file that failed to format
    pub path: String,
    /// Human readable reason
    pub message: String,
}

/// A generated file for preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}
