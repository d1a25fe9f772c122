use std::path::{Path, PathBuf};

use genbuilder_core::{FileRules, GeneratedFile};

use super::GENERATED_HEADER;
use crate::{
    GoFile, GoType,
    ast::{CompositeLiteral, Field, Func, Param, Struct},
};

/// The `<type>builder.go` file: a mutable builder with chainable setters.
pub struct BuilderGo<'a> {
    ty: &'a GoType,
    package: &'a str,
}

impl<'a> BuilderGo<'a> {
    pub fn new(ty: &'a GoType, package: &'a str) -> Self {
        Self { ty, package }
    }

    fn declaration(&self) -> Struct {
        Struct::new(&self.ty.builder).fields(
            self.ty
                .fields
                .iter()
                .map(|f| Field::new(&f.public, &f.ty)),
        )
    }

    fn constructor(&self) -> Func {
        let builder = &self.ty.builder;
        Func::new(self.ty.builder_constructor())
            .returns(format!("*{}", builder))
            .body_line(format!("return new({})", builder))
    }

    fn setters(&self) -> impl Iterator<Item = Func> + '_ {
        let ty = self.ty;
        let r = &ty.receiver;
        ty.fields.iter().map(move |f| {
            Func::new(f.setter())
                .receiver(r, &ty.builder)
                .param(Param::new(&f.param, &f.ty))
                .returns(format!("*{}", ty.builder))
                .body_line(format!("{}.{} = {}", r, f.public, f.param))
                .body_line(format!("return {}", r))
        })
    }

    fn build(&self) -> Func {
        let ty = self.ty;
        let r = &ty.receiver;
        let literal = ty.fields.iter().fold(
            CompositeLiteral::new(&ty.name).address_of().returned(),
            |lit, f| lit.entry(&f.name, format!("{}.{}", r, f.public)),
        );

        Func::new("Build")
            .receiver(r, &ty.builder)
            .returns(format!("*{}", ty.name))
            .body_node(literal)
    }
}

impl GeneratedFile for BuilderGo<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.ty.builder_file_name())
    }

    fn rules(&self) -> FileRules {
        FileRules::always_overwrite().with_header(GENERATED_HEADER)
    }

    fn render(&self) -> String {
        GoFile::new(self.package)
            .imports(self.ty.imports.clone())
            .add(self.declaration())
            .add(self.constructor())
            .add_all(self.setters())
            .add(self.build())
            .render()
    }
}
