//! Generate operation - Go code from a schema.

use std::path::Path;

use eyre::{Context, Result};
use genbuilder_codegen::LanguageCodegen;
use genbuilder_codegen_go::{Formatter, Generator};
use genbuilder_schema::{Schema, package_from_dir};
use tracing::{debug, info};

use crate::reports::{GenerateReport, GenerationResult, PreviewResult, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Directory the files are written into.
    pub output_dir: &'a Path,
    /// Go package every file declares.
    pub package: &'a str,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// Formatter run on each written file.
    pub formatter: Option<Formatter>,
}

/// Pick the Go package for a run.
///
/// An explicit `--package` wins, then `[output].package`. Otherwise the name
/// comes from the directory the files land in: `--output` when given, else
/// `[output].dir`. A directory such as `.` is resolved on disk to its real
/// name; `None` means the caller must ask for `--package`.
pub fn resolve_package(
    schema: &Schema,
    package: Option<&str>,
    output: Option<&Path>,
) -> Option<String> {
    if let Some(package) = package.or(schema.output.package.as_deref()) {
        return Some(package.to_string());
    }

    let dir = output.unwrap_or(&schema.output.dir);
    package_from_dir(dir).or_else(|| {
        let canonical = std::fs::canonicalize(dir).ok()?;
        debug!(dir = %dir.display(), canonical = %canonical.display(), "package from canonical dir");
        package_from_dir(&canonical)
    })
}

/// Execute the generate operation.
pub fn generate(schema: &Schema, opts: GenerateOptions) -> Result<GenerateReport> {
    let mut generator = Generator::new(&schema.types, opts.package);
    if let Some(formatter) = opts.formatter {
        debug!(command = formatter.command(), "formatter enabled");
        generator = generator.with_formatter(formatter);
    }

    let result = if opts.dry_run {
        let files = generator
            .preview()
            .wrap_err("Failed to render generated code")?;
        GenerationResult::Preview(PreviewResult { files })
    } else {
        info!(
            dir = %opts.output_dir.display(),
            package = opts.package,
            types = schema.types.len(),
            "generating"
        );
        let gen_result = generator
            .generate(opts.output_dir)
            .wrap_err("Failed to generate code")?;

        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            files: gen_result.written,
            format_warnings: gen_result.format_warnings,
        })
    };

    Ok(GenerateReport {
        package: opts.package.to_string(),
        type_count: schema.types.len(),
        field_count: schema.field_count(),
        result,
    })
}
