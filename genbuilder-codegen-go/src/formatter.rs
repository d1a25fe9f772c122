//! External Go formatter invocation.

use std::{path::Path, process::Command};

use thiserror::Error;

/// Failure to format a generated file. Never fatal to generation.
#[derive(Debug, Error)]
pub enum FormatterError {
    #[error("failed to run '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{command}' exited with {status}: {stderr}")]
    Failed {
        command: String,
        status: String,
        stderr: String,
    },
}

/// A formatter run as `<command> <args...> <file>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatter {
    command: String,
    args: Vec<String>,
}

impl Formatter {
    pub fn new(
        command: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            command: command.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// `goimports -w <file>`: formats and fixes imports in place.
    pub fn goimports() -> Self {
        Self::new("goimports", ["-w"])
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Run the formatter on one file, blocking until it exits.
    pub fn run(&self, path: &Path) -> Result<(), FormatterError> {
        let output = Command::new(&self.command)
            .args(&self.args)
            .arg(path)
            .output()
            .map_err(|source| FormatterError::Spawn {
                command: self.command.clone(),
                source,
            })?;

        if output.status.success() {
            Ok(())
        } else {
            Err(FormatterError::Failed {
                command: self.command.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::goimports()
    }
}
