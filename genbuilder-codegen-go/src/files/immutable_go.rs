use std::path::{Path, PathBuf};

use genbuilder_core::{FileRules, GeneratedFile};

use super::GENERATED_HEADER;
use crate::{
    GoFile, GoType,
    ast::{CompositeLiteral, Field, Func, Struct},
};

/// The `<type>.go` file: the immutable value type with getters and `AsBuilder`.
pub struct ImmutableGo<'a> {
    ty: &'a GoType,
    package: &'a str,
}

impl<'a> ImmutableGo<'a> {
    pub fn new(ty: &'a GoType, package: &'a str) -> Self {
        Self { ty, package }
    }

    fn declaration(&self) -> Struct {
        Struct::new(&self.ty.name).fields(
            self.ty
                .fields
                .iter()
                .map(|f| Field::new(&f.name, &f.ty)),
        )
    }

    fn constructor(&self) -> Func {
        let name = &self.ty.name;
        Func::new(self.ty.constructor())
            .returns(format!("*{}", name))
            .body_line(format!("return new({})", name))
    }

    fn getters(&self) -> impl Iterator<Item = Func> + '_ {
        let ty = self.ty;
        let r = &ty.receiver;
        ty.fields.iter().map(move |f| {
            Func::new(&f.public)
                .receiver(r, &ty.name)
                .returns(&f.ty)
                .body_line(format!("return {}.{}", r, f.name))
        })
    }

    // Members are read directly, never through getters.
    fn as_builder(&self) -> Func {
        let ty = self.ty;
        let r = &ty.receiver;
        let literal = ty.fields.iter().fold(
            CompositeLiteral::new(&ty.builder).address_of().returned(),
            |lit, f| lit.entry(&f.public, format!("{}.{}", r, f.name)),
        );

        Func::new("AsBuilder")
            .receiver(r, &ty.name)
            .returns(format!("*{}", ty.builder))
            .body_node(literal)
    }
}

impl GeneratedFile for ImmutableGo<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.ty.file_name())
    }

    fn rules(&self) -> FileRules {
        FileRules::always_overwrite().with_header(GENERATED_HEADER)
    }

    fn render(&self) -> String {
        GoFile::new(self.package)
            .imports(self.ty.imports.clone())
            .add(self.declaration())
            .add(self.constructor())
            .add_all(self.getters())
            .add(self.as_builder())
            .render()
    }
}
