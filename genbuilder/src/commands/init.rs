use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use genbuilder_core::{File, FileRules, WriteResult};
use genbuilder_schema::{DEFAULT_SCHEMA_FILE, SchemaFile};

#[derive(Args)]
pub struct InitCommand {
    /// Where to write the starter schema
    #[arg(short, long, default_value = DEFAULT_SCHEMA_FILE)]
    pub schema: PathBuf,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let file =
            File::new(&self.schema, SchemaFile::sample()).with_rules(FileRules::if_missing());
        let result = file
            .write()
            .wrap_err_with(|| format!("Failed to create {}", self.schema.display()))?;

        match result {
            WriteResult::Written => {
                println!("Created {}", self.schema.display());
                println!();
                println!("Next steps:");
                println!("  genbuilder check -s {}", self.schema.display());
                println!("  genbuilder generate -s {}", self.schema.display());
            }
            WriteResult::Skipped => {
                println!("{} already exists, leaving it untouched", self.schema.display());
            }
        }

        Ok(())
    }
}
