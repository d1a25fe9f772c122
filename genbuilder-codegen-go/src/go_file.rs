//! GoFile abstraction for structured Go file generation.
//!
//! Provides a high-level API for generating Go files with a package
//! clause, an import declaration, and body content.

use genbuilder_codegen::{CodeBuilder, CodeFragment, ImportCollector, Renderable};

/// A Go import declaration built from collected imports.
///
/// Renders nothing for no imports, `import "x"` for one, and a
/// parenthesized block sorted by path otherwise.
#[derive(Debug, Clone, Default)]
pub struct ImportDecl {
    imports: ImportCollector,
}

impl ImportDecl {
    pub fn new(imports: ImportCollector) -> Self {
        Self { imports }
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    fn spec(path: &str, alias: Option<&str>) -> String {
        match alias {
            Some(alias) => format!("{} \"{}\"", alias, path),
            None => format!("\"{}\"", path),
        }
    }
}

impl Renderable for ImportDecl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let sorted = self.imports.sorted();
        match sorted.as_slice() {
            [] => Vec::new(),
            [(path, alias)] => vec![CodeFragment::line(format!(
                "import {}",
                Self::spec(path, *alias)
            ))],
            specs => vec![CodeFragment::block(
                "import (",
                specs
                    .iter()
                    .map(|(path, alias)| CodeFragment::line(Self::spec(path, *alias)))
                    .collect(),
                Some(")".to_string()),
            )],
        }
    }
}

/// A structured representation of a Go source file.
///
/// # Example
///
/// ```
/// use genbuilder_codegen_go::{GoFile, ast::Struct};
///
/// let code = GoFile::new("shapes").add(Struct::new("Point")).render();
/// assert_eq!(code, "package shapes\n\ntype Point struct{}\n");
/// ```
#[derive(Debug, Clone)]
pub struct GoFile {
    package: String,
    imports: ImportDecl,
    body: Vec<Vec<CodeFragment>>,
}

impl GoFile {
    /// Create a new file in the given package.
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            imports: ImportDecl::default(),
            body: Vec::new(),
        }
    }

    /// Set the imports of the file.
    pub fn imports(mut self, imports: ImportCollector) -> Self {
        self.imports = ImportDecl::new(imports);
        self
    }

    /// Add a top-level declaration (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Add multiple top-level declarations.
    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        for node in nodes {
            self.body.push(node.to_fragments());
        }
        self
    }

    /// Render the file: package clause, imports, then declarations,
    /// each separated by one blank line.
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::new();

        builder.push_line(&format!("package {}", self.package));

        if !self.imports.is_empty() {
            builder.push_blank();
            builder.emit(&self.imports);
        }

        for fragments in &self.body {
            builder.push_blank();
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Field, Func, Struct};

    fn imports(paths: &[(&str, Option<&str>)]) -> ImportCollector {
        let mut collector = ImportCollector::new();
        for (path, alias) in paths {
            match alias {
                Some(alias) => collector.add_named(path, alias),
                None => collector.add(path),
            }
        }
        collector
    }

    #[test]
    fn test_package_only() {
        assert_eq!(GoFile::new("builders").render(), "package builders\n");
    }

    #[test]
    fn test_single_import() {
        let code = GoFile::new("builders")
            .imports(imports(&[("time", None)]))
            .render();
        assert_eq!(code, "package builders\n\nimport \"time\"\n");
    }

    #[test]
    fn test_import_block_is_sorted() {
        let code = GoFile::new("builders")
            .imports(imports(&[
                ("time", None),
                ("io", None),
                ("github.com/x/y/v2", Some("y")),
            ]))
            .render();
        assert_eq!(
            code,
            "package builders\n\nimport (\n\ty \"github.com/x/y/v2\"\n\t\"io\"\n\t\"time\"\n)\n"
        );
    }

    #[test]
    fn test_declarations_separated_by_blank_line() {
        let code = GoFile::new("shapes")
            .add(Struct::new("Point").field(Field::new("x", "int")))
            .add(Func::new("NewPoint").returns("*Point").body_line("return new(Point)"))
            .render();
        assert_eq!(
            code,
            "package shapes\n\ntype Point struct {\n\tx int\n}\n\nfunc NewPoint() *Point {\n\treturn new(Point)\n}\n"
        );
    }
}
