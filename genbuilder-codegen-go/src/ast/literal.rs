//! Go composite literals (`&T{key: value}`).

use genbuilder_codegen::builder::{CodeFragment, Renderable};

use super::align_columns;

/// A keyed composite literal, optionally address-of and returned.
#[derive(Debug, Clone)]
pub struct CompositeLiteral {
    ty: String,
    address_of: bool,
    returned: bool,
    entries: Vec<(String, String)>,
}

impl CompositeLiteral {
    pub fn new(ty: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            address_of: false,
            returned: false,
            entries: Vec::new(),
        }
    }

    /// Take the literal's address (`&T{...}`).
    pub fn address_of(mut self) -> Self {
        self.address_of = true;
        self
    }

    /// Render as a `return` statement.
    pub fn returned(mut self) -> Self {
        self.returned = true;
        self
    }

    pub fn entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.push((key.into(), value.into()));
        self
    }

    fn opening(&self) -> String {
        format!(
            "{}{}{}{{",
            if self.returned { "return " } else { "" },
            if self.address_of { "&" } else { "" },
            self.ty
        )
    }
}

impl Renderable for CompositeLiteral {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.entries.is_empty() {
            return vec![CodeFragment::line(format!("{}}}", self.opening()))];
        }

        let keys: Vec<String> = self.entries.iter().map(|(k, _)| format!("{}:", k)).collect();
        let rows = align_columns(
            keys.iter()
                .zip(&self.entries)
                .map(|(key, (_, value))| (key.as_str(), value.as_str())),
            ",",
        );

        vec![CodeFragment::block(
            self.opening(),
            rows.into_iter().map(CodeFragment::Line).collect(),
            Some("}".to_string()),
        )]
    }
}

#[cfg(test)]
mod tests {
    use genbuilder_codegen::CodeBuilder;

    use super::*;

    fn render(literal: &CompositeLiteral) -> String {
        let mut builder = CodeBuilder::new();
        builder.emit(literal);
        builder.build()
    }

    #[test]
    fn test_empty_literal() {
        let lit = CompositeLiteral::new("Jason").address_of().returned();
        assert_eq!(render(&lit), "return &Jason{}\n");
    }

    #[test]
    fn test_keys_are_aligned() {
        let lit = CompositeLiteral::new("Jason")
            .address_of()
            .returned()
            .entry("t", "j.T")
            .entry("integer32", "j.Integer32");

        assert_eq!(
            render(&lit),
            "return &Jason{\n\tt:         j.T,\n\tinteger32: j.Integer32,\n}\n"
        );
    }

    #[test]
    fn test_plain_value_literal() {
        let lit = CompositeLiteral::new("Point").entry("X", "1");
        assert_eq!(render(&lit), "Point{\n\tX: 1,\n}\n");
    }
}
