//! Go function and method declarations.

use genbuilder_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A parameter in a Go function.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// Builder for Go functions and pointer-receiver methods.
#[derive(Debug, Clone)]
pub struct Func {
    name: String,
    receiver: Option<Param>,
    params: Vec<Param>,
    returns: Option<String>,
    body: Vec<CodeFragment>,
}

impl Func {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            receiver: None,
            params: Vec::new(),
            returns: None,
            body: Vec::new(),
        }
    }

    /// Make this a method on `*ty` bound to `name`.
    pub fn receiver(mut self, name: impl Into<String>, ty: impl AsRef<str>) -> Self {
        self.receiver = Some(Param::new(name, format!("*{}", ty.as_ref())));
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.returns = Some(ty.into());
        self
    }

    /// Add a line to the function body.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(CodeFragment::line(line));
        self
    }

    /// Add a rendered node to the function body.
    pub fn body_node(mut self, node: impl Renderable) -> Self {
        self.body.extend(node.to_fragments());
        self
    }

    fn signature(&self) -> String {
        let receiver = self
            .receiver
            .as_ref()
            .map(|r| format!("({} {}) ", r.name, r.ty))
            .unwrap_or_default();

        let params = self
            .params
            .iter()
            .map(|p| format!("{} {}", p.name, p.ty))
            .collect::<Vec<_>>()
            .join(", ");

        match &self.returns {
            Some(ret) => format!("func {}{}({}) {} {{", receiver, self.name, params, ret),
            None => format!("func {}{}({}) {{", receiver, self.name, params),
        }
    }

    /// Build the function as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::new();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Func {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::block(
            self.signature(),
            self.body.clone(),
            Some("}".to_string()),
        )]
    }
}
