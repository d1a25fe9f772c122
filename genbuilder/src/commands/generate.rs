use std::path::PathBuf;

use clap::Args;
use eyre::{Result, eyre};
use genbuilder_codegen_go::Formatter;
use genbuilder_schema::{DEFAULT_SCHEMA_FILE, SchemaFile};

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the schema file (TOML, or JSON by extension)
    #[arg(short, long, default_value = DEFAULT_SCHEMA_FILE)]
    pub schema: PathBuf,

    /// Output directory (overrides [output].dir)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Go package name (overrides [output].package)
    #[arg(short, long)]
    pub package: Option<String>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Skip the configured formatter
    #[arg(long)]
    pub no_format: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let schema_file = SchemaFile::open(&self.schema).unwrap_or_exit();
        let schema = schema_file.schema();

        let output_dir = self
            .output
            .clone()
            .unwrap_or_else(|| schema.output.dir.clone());
        let package =
            ops::resolve_package(schema, self.package.as_deref(), self.output.as_deref())
                .ok_or_else(|| {
                    eyre!(
                        "cannot derive a Go package name from '{}'; pass --package",
                        output_dir.display()
                    )
                })?;

        let formatter = (schema.formatter.enabled && !self.no_format)
            .then(|| Formatter::new(&schema.formatter.command, &schema.formatter.args));

        let report = ops::generate(
            schema,
            GenerateOptions {
                output_dir: &output_dir,
                package: &package,
                dry_run: self.dry_run,
                formatter,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
