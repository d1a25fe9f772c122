//! Check operation - schema validation.

use std::path::Path;

use eyre::{Context, Result, eyre};
use genbuilder_codegen_go::validate_all;
use genbuilder_schema::Schema;

use super::resolve_package;
use crate::reports::{CheckReport, FieldSummary, TypeSummary};

/// Execute the check operation.
///
/// The schema has already passed its own validation when it was opened;
/// this runs the Go naming rules on top and summarizes what would be
/// generated.
pub fn check(schema: &Schema, schema_path: &Path) -> Result<CheckReport> {
    let package = resolve_package(schema, None, None).ok_or_else(|| {
        eyre!(
            "cannot derive a Go package name from '{}'; set [output].package",
            schema.output.dir.display()
        )
    })?;
    let types = validate_all(&schema.types, &package).wrap_err("Validation failed")?;

    let types = types
        .into_iter()
        .map(|ty| TypeSummary {
            fields: ty
                .fields
                .iter()
                .map(|f| FieldSummary {
                    name: f.name.clone(),
                    type_name: f.ty.clone(),
                })
                .collect(),
            files: [ty.builder_file_name(), ty.file_name()],
            name: ty.name,
            builder: ty.builder,
        })
        .collect();

    Ok(CheckReport {
        schema_path: schema_path.to_path_buf(),
        package,
        output_dir: schema.output.dir.clone(),
        formatter: schema
            .formatter
            .enabled
            .then(|| schema.formatter.command.clone()),
        types,
    })
}
