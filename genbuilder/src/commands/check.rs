use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use genbuilder_schema::{DEFAULT_SCHEMA_FILE, SchemaFile};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the schema file (TOML, or JSON by extension)
    #[arg(short, long, default_value = DEFAULT_SCHEMA_FILE)]
    pub schema: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let schema_file = SchemaFile::open(&self.schema).unwrap_or_exit();

        let report = ops::check(schema_file.schema(), schema_file.path())?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
