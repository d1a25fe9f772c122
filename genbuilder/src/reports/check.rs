//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from schema validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the schema file.
    pub schema_path: PathBuf,
    /// Go package the files would declare.
    pub package: String,
    /// Configured output directory.
    pub output_dir: PathBuf,
    /// Formatter command, if enabled.
    pub formatter: Option<String>,
    /// Types in declaration order.
    pub types: Vec<TypeSummary>,
}

/// One validated type.
#[derive(Debug)]
pub struct TypeSummary {
    pub name: String,
    pub builder: String,
    /// Builder file, then immutable file.
    pub files: [String; 2],
    pub fields: Vec<FieldSummary>,
}

#[derive(Debug)]
pub struct FieldSummary {
    pub name: String,
    pub type_name: String,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!("✓ {} is valid", self.schema_path.display()));
        out.newline();

        out.key_value("Package", &self.package);
        out.key_value("Output", &self.output_dir.display().to_string());
        out.key_value("Formatter", self.formatter.as_deref().unwrap_or("disabled"));
        out.newline();

        out.section(&format!("Types ({})", self.types.len()));
        for ty in &self.types {
            out.list_item(&format!(
                "{} ({}): {}",
                ty.name,
                ty.builder,
                ty.files.join(", ")
            ));
            for field in &ty.fields {
                out.key_value_indented(&field.name, &field.type_name);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::testing::RecordingOutput;

    fn report(formatter: Option<&str>) -> CheckReport {
        CheckReport {
            schema_path: PathBuf::from("genbuilder.toml"),
            package: "builders".into(),
            output_dir: PathBuf::from("builders"),
            formatter: formatter.map(str::to_string),
            types: vec![TypeSummary {
                name: "Jason".into(),
                builder: "JasonBuilder".into(),
                files: ["jasonbuilder.go".into(), "jason.go".into()],
                fields: vec![FieldSummary {
                    name: "reader".into(),
                    type_name: "io.Reader".into(),
                }],
            }],
        }
    }

    #[test]
    fn test_render_summary() {
        let mut out = RecordingOutput::default();
        report(Some("goimports")).render(&mut out);

        assert!(out.contains("✓ genbuilder.toml is valid"));
        assert!(out.contains("Package: builders"));
        assert!(out.contains("Formatter: goimports"));
        assert!(out.contains("section Types (1)"));
        assert!(out.contains("- Jason (JasonBuilder): jasonbuilder.go, jason.go"));
        assert!(out.contains("  reader: io.Reader"));
    }

    #[test]
    fn test_render_without_formatter() {
        let mut out = RecordingOutput::default();
        report(None).render(&mut out);

        assert!(out.contains("Formatter: disabled"));
        assert!(!out.contains("Formatter: goimports"));
    }
}
