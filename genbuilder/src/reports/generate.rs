//! Generate command report data structures.

use std::path::PathBuf;

use genbuilder_codegen::{FormatWarning, PreviewFile};

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Go package the files declare.
    pub package: String,

    /// Number of types in the schema.
    pub type_count: usize,

    /// Number of fields across all types.
    pub field_count: usize,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Output directory.
    pub output_dir: PathBuf,
    /// Files written, relative to the output directory.
    pub files: Vec<String>,
    /// Files the formatter could not process.
    pub format_warnings: Vec<FormatWarning>,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        for warning in &written.format_warnings {
            out.warning(&format!("{}: {}", warning.path, warning.message));
        }

        out.key_value("Package", &self.package);
        out.key_value(
            "Types",
            &format!(
                "{} ({} field{})",
                self.type_count,
                self.field_count,
                if self.field_count == 1 { "" } else { "s" }
            ),
        );
        out.newline();

        out.section(&format!("Generated in {}", written.output_dir.display()));
        for file in &written.files {
            out.added_item(file);
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", preview.files.len()));
    }
}
