//! Import resolution for qualified field types.

use genbuilder_codegen::ImportCollector;
use genbuilder_core::{TypeSpec, type_qualifiers};

/// Imports a type's field types need.
#[derive(Debug, Clone, Default)]
pub struct ResolvedImports {
    /// Declared imports referenced by at least one field type.
    pub imports: ImportCollector,
    /// Qualifiers with no matching declared import, in order of first use.
    ///
    /// Validation rejects a type with any of these, so written files never
    /// depend on a formatter to compile.
    pub unresolved: Vec<String>,
}

/// Match every package qualifier in the field types against the declared imports.
///
/// Declared imports that no field references are dropped, since Go rejects
/// unused imports.
pub fn resolve_imports(spec: &TypeSpec) -> ResolvedImports {
    let mut resolved = ResolvedImports::default();

    for field in &spec.fields {
        for qualifier in type_qualifiers(&field.type_name) {
            let declared = spec
                .imports
                .iter()
                .find(|import| import.package_name() == qualifier);

            match declared {
                Some(import) => match &import.name {
                    Some(alias) => resolved.imports.add_named(&import.path, alias),
                    None => resolved.imports.add(&import.path),
                },
                None => {
                    if !resolved.unresolved.iter().any(|q| q == qualifier) {
                        resolved.unresolved.push(qualifier.to_string());
                    }
                }
            }
        }
    }

    resolved
}
