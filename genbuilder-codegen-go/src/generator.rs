use std::path::Path;

use eyre::Result;
use genbuilder_codegen::{FormatWarning, GenerateResult, LanguageCodegen, PreviewFile};
use genbuilder_core::{GeneratedFile, TypeSpec};
use tracing::{debug, warn};

use crate::{
    Formatter, GoType,
    files::{BuilderGo, ImmutableGo},
    pipeline::validate_all,
};

/// Go code generator producing a builder file and an immutable type file per type.
pub struct Generator<'a> {
    types: &'a [TypeSpec],
    package: &'a str,
    formatter: Option<Formatter>,
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "go"
    }

    fn file_extension(&self) -> &'static str {
        "go"
    }

    fn preview(&self) -> Result<Vec<PreviewFile>> {
        self.preview_files()
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        self.generate_files(output_dir)
    }
}

impl<'a> Generator<'a> {
    /// A generator without a formatter.
    pub fn new(types: &'a [TypeSpec], package: &'a str) -> Self {
        Self {
            types,
            package,
            formatter: None,
        }
    }

    /// Run `formatter` on every file after it is written.
    pub fn with_formatter(mut self, formatter: Formatter) -> Self {
        self.formatter = Some(formatter);
        self
    }

    fn plan(&self) -> Result<Vec<GoType>> {
        let types = validate_all(self.types, self.package)?;
        debug!(package = self.package, types = types.len(), "validated");
        Ok(types)
    }

    fn files<'t>(&self, ty: &'t GoType) -> [Box<dyn GeneratedFile + 't>; 2]
    where
        'a: 't,
    {
        [
            Box::new(BuilderGo::new(ty, self.package)),
            Box::new(ImmutableGo::new(ty, self.package)),
        ]
    }

    /// Render every file without touching the disk.
    fn preview_files(&self) -> Result<Vec<PreviewFile>> {
        let types = self.plan()?;
        let mut previews = Vec::with_capacity(types.len() * 2);

        for ty in &types {
            for file in self.files(ty) {
                previews.push(PreviewFile {
                    path: relative(&*file),
                    content: file.contents(),
                });
            }
        }

        Ok(previews)
    }

    /// Write every file, then format it when a formatter is configured.
    fn generate_files(&self, output_dir: &Path) -> Result<GenerateResult> {
        let types = self.plan()?;
        let mut result = GenerateResult::default();

        for ty in &types {
            for file in self.files(ty) {
                let name = relative(&*file);
                file.write(output_dir)?;
                debug!(file = %name, "wrote");

                if let Some(formatter) = &self.formatter {
                    if let Err(e) = formatter.run(&file.path(output_dir)) {
                        warn!(file = %name, error = %e, "formatter failed");
                        result.format_warnings.push(FormatWarning {
                            path: name.clone(),
                            message: e.to_string(),
                        });
                    }
                }

                result.written.push(name);
            }
        }

        Ok(result)
    }
}

fn relative(file: &dyn GeneratedFile) -> String {
    file.path(Path::new("")).display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn types() -> Vec<TypeSpec> {
        vec![
            TypeSpec::new("Point").field("x", "int").field("y", "int"),
            TypeSpec::new("Empty"),
        ]
    }

    #[test]
    fn test_preview_lists_both_files_per_type() {
        let types = types();
        let previews = Generator::new(&types, "geo").preview().expect("preview");
        let paths: Vec<_> = previews.iter().map(|p| p.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["pointbuilder.go", "point.go", "emptybuilder.go", "empty.go"]
        );
        assert!(
            previews
                .iter()
                .all(|p| p.content.starts_with(genbuilder_core::GENERATED_HEADER))
        );
    }

    #[test]
    fn test_preview_rejects_invalid_types() {
        let types = vec![TypeSpec::new("Point").field("x", "int").field("x", "int")];
        assert!(Generator::new(&types, "geo").preview().is_err());
    }

    #[test]
    fn test_undeclared_import_is_rejected_before_writing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let types = vec![TypeSpec::new("Doc").field("r", "io.Reader")];
        let err = Generator::new(&types, "docs")
            .with_formatter(Formatter::goimports())
            .generate(dir.path())
            .expect_err("io is not declared");

        assert!(err.to_string().contains("'io'"));
        assert!(!dir.path().join("docbuilder.go").exists());
    }

    #[test]
    fn test_generate_writes_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        let types = types();
        let result = Generator::new(&types, "geo")
            .generate(dir.path())
            .expect("generate");

        assert_eq!(result.written.len(), 4);
        assert!(result.is_clean());
        for name in &result.written {
            assert!(dir.path().join(name).is_file(), "{} missing", name);
        }
    }

    #[test]
    fn test_generate_creates_output_dir() {
        let dir = tempfile::tempdir().expect("tempdir");
        let out = dir.path().join("nested").join("builders");
        let types = types();
        Generator::new(&types, "builders")
            .generate(&out)
            .expect("generate");
        assert!(out.join("point.go").is_file());
    }

    #[test]
    fn test_formatter_failure_is_a_warning() {
        let dir = tempfile::tempdir().expect("tempdir");
        let types = types();
        let result = Generator::new(&types, "geo")
            .with_formatter(Formatter::new("genbuilder-no-such-formatter", ["-w"]))
            .generate(dir.path())
            .expect("generate");

        assert_eq!(result.written.len(), 4);
        assert_eq!(result.format_warnings.len(), 4);
        assert_eq!(result.format_warnings[0].path, "pointbuilder.go");
        assert!(dir.path().join("pointbuilder.go").is_file());
    }

    #[test]
    fn test_language() {
        let types = types();
        let generator = Generator::new(&types, "geo");
        assert_eq!(generator.language(), "go");
        assert_eq!(generator.file_extension(), "go");
    }
}
