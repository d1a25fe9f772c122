//! Tab-indented text buffer.

use super::{CodeFragment, Renderable};

/// Accumulates lines at a tracked nesting depth.
///
/// Each level of depth is one tab, the indentation `gofmt` produces.
///
/// ```
/// use genbuilder_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::new();
/// builder
///     .push_line("type Point struct {")
///     .push_indent()
///     .push_line("X int")
///     .push_dedent()
///     .push_line("}");
/// assert_eq!(builder.build(), "type Point struct {\n\tX int\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    depth: usize,
    buffer: String,
}

impl CodeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write `line` at the current depth and end it with a newline.
    pub fn push_line(&mut self, line: &str) -> &mut Self {
        for _ in 0..self.depth {
            self.buffer.push('\t');
        }
        self.buffer.push_str(line);
        self.buffer.push('\n');
        self
    }

    /// Write an empty line. Blank lines never carry indentation.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.depth += 1;
        self
    }

    /// Step one level out; stays at zero when already there.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self
    }

    /// Write every fragment of `node`.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Write one fragment; block bodies go one level deeper than their header.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(line) => {
                self.push_line(&line);
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header).push_indent();
                for inner in body {
                    self.apply_fragment(inner);
                }
                self.push_dedent();
                if let Some(close) = close {
                    self.push_line(&close);
                }
            }
        }
    }

    pub fn build(self) -> String {
        self.buffer
    }
}
