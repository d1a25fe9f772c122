//! The two generation pipelines and the validation that guards them.
//!
//! Validation runs before any text is emitted. Once a type has passed,
//! rendering cannot fail.

use std::collections::{HashMap, HashSet};

use genbuilder_core::{GeneratedFile, TypeSpec, validate_identifier};

use crate::{
    Error, GoType,
    files::{BuilderGo, ImmutableGo},
    imports::resolve_imports,
    naming::field_context,
};

/// Methods generated on the builder type.
const BUILDER_METHODS: &[&str] = &["Build"];
/// Methods generated on the immutable type besides the getters.
const IMMUTABLE_METHODS: &[&str] = &["AsBuilder"];

fn check_identifier(name: &str, context: impl Into<String>) -> Result<(), Error> {
    match validate_identifier(name) {
        Some(reason) => Err(Error::invalid(name, context, reason)),
        None => Ok(()),
    }
}

/// Check one type against the package it will be generated into.
///
/// Returns the derived Go names on success.
pub fn validate(spec: &TypeSpec, package: &str) -> Result<GoType, Error> {
    check_identifier(package, "package name")?;
    check_identifier(&spec.name, "type name")?;

    for import in &spec.imports {
        if let Some(alias) = &import.name {
            check_identifier(alias, format!("import alias for '{}'", import.path))?;
        }
    }

    let context = field_context(&spec.name);
    let mut seen = HashSet::new();
    for field in &spec.fields {
        check_identifier(&field.name, context.clone())?;

        if !field.name.chars().next().is_some_and(char::is_lowercase) {
            return Err(Error::invalid(
                &field.name,
                context,
                "name must start with a lower-case letter",
            ));
        }

        if !seen.insert(field.name.as_str()) {
            return Err(Error::DuplicateField {
                type_name: spec.name.clone(),
                field: field.name.clone(),
            });
        }

        if field.type_name.trim().is_empty() {
            return Err(Error::EmptyFieldType {
                type_name: spec.name.clone(),
                field: field.name.clone(),
            });
        }
    }

    let resolved = resolve_imports(spec);
    if let Some(qualifier) = resolved.unresolved.into_iter().next() {
        return Err(Error::UndeclaredImport {
            type_name: spec.name.clone(),
            qualifier,
        });
    }

    let ty = GoType::derive(spec, resolved.imports)?;
    check_members(&ty)?;
    Ok(ty)
}

// Builder members share a namespace with its setters and `Build`; getters
// share one with `AsBuilder`. Distinct fields can still share an exported
// name (`sa` and `ſa` both become `Sa`).
fn check_members(ty: &GoType) -> Result<(), Error> {
    let context = field_context(&ty.name);
    let setters: HashMap<String, &str> = ty
        .fields
        .iter()
        .map(|f| (f.setter(), f.name.as_str()))
        .collect();
    let mut exported: HashMap<&str, &str> = HashMap::new();

    for field in &ty.fields {
        if let Some(other) = exported.insert(&field.public, &field.name) {
            return Err(Error::invalid(
                &field.name,
                context,
                format!("exported name '{}' is also used by field '{}'", field.public, other),
            ));
        }

        if BUILDER_METHODS.contains(&field.public.as_str()) {
            return Err(Error::invalid(
                &field.name,
                context,
                format!("collides with the generated {} method", field.public),
            ));
        }

        if IMMUTABLE_METHODS.contains(&field.public.as_str()) {
            return Err(Error::invalid(
                &field.name,
                context,
                format!("getter collides with the generated {} method", field.public),
            ));
        }

        if let Some(owner) = setters.get(&field.public) {
            return Err(Error::invalid(
                &field.name,
                context,
                format!("'{}' collides with the setter of field '{}'", field.public, owner),
            ));
        }
    }

    Ok(())
}

/// Validate every type of one package, including collisions between types.
///
/// Two types collide when they declare the same package-level identifier
/// or when their file names differ only by case.
pub fn validate_all(specs: &[TypeSpec], package: &str) -> Result<Vec<GoType>, Error> {
    let mut owners: HashMap<String, String> = HashMap::new();
    let mut types = Vec::with_capacity(specs.len());

    for spec in specs {
        let ty = validate(spec, package)?;

        let identifiers = ty.declared_identifiers().into_iter();
        let files = [ty.file_name(), ty.builder_file_name()]
            .into_iter()
            .map(|f| f.to_lowercase());

        for key in identifiers.chain(files) {
            if let Some(owner) = owners.get(&key) {
                let reason = if *owner == ty.name {
                    "another type of the same name".to_string()
                } else {
                    format!("'{}' generated for type '{}'", key, owner)
                };
                return Err(Error::DuplicateType {
                    name: ty.name.clone(),
                    reason,
                });
            }
        }

        for key in ty.declared_identifiers() {
            owners.insert(key, ty.name.clone());
        }
        for file in [ty.file_name(), ty.builder_file_name()] {
            owners.insert(file.to_lowercase(), ty.name.clone());
        }

        types.push(ty);
    }

    Ok(types)
}

/// Generate the builder file for `spec`, header included.
pub fn generate_builder(spec: &TypeSpec, package: &str) -> Result<String, Error> {
    let ty = validate(spec, package)?;
    Ok(BuilderGo::new(&ty, package).contents())
}

/// Generate the immutable type file for `spec`, header included.
pub fn generate_immutable(spec: &TypeSpec, package: &str) -> Result<String, Error> {
    let ty = validate(spec, package)?;
    Ok(ImmutableGo::new(&ty, package).contents())
}

#[cfg(test)]
mod tests {
    use genbuilder_core::Import;

    use super::*;

    fn point() -> TypeSpec {
        TypeSpec::new("Point").field("x", "int").field("y", "int")
    }

    fn invalid_reason(result: Result<GoType, Error>) -> String {
        match result {
            Err(Error::InvalidIdentifier { reason, .. }) => reason,
            other => panic!("expected InvalidIdentifier, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_type() {
        let ty = validate(&point(), "geo").expect("valid");
        assert_eq!(ty.fields.len(), 2);
    }

    #[test]
    fn test_invalid_package() {
        let err = validate(&point(), "my-pkg").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidIdentifier { ref context, .. } if context == "package name"
        ));
    }

    #[test]
    fn test_empty_type_name() {
        let reason = invalid_reason(validate(&TypeSpec::new(""), "geo"));
        assert_eq!(reason, "name cannot be empty");
    }

    #[test]
    fn test_keyword_type_name() {
        let reason = invalid_reason(validate(&TypeSpec::new("struct"), "geo"));
        assert_eq!(reason, "name is a Go keyword");
    }

    #[test]
    fn test_type_name_without_receiver() {
        for name in ["_Point", "İtem"] {
            let spec = TypeSpec::new(name).field("x", "int");
            assert!(matches!(
                validate(&spec, "geo"),
                Err(Error::InvalidIdentifier { context, .. }) if context == "type name"
            ));
            assert!(generate_builder(&spec, "geo").is_err());
        }
    }

    #[test]
    fn test_type_name_without_upper_case_form() {
        let reason = invalid_reason(validate(&TypeSpec::new("ªPoint"), "geo"));
        assert!(reason.contains("cannot be exported"));
    }

    #[test]
    fn test_field_without_single_upper_case_form() {
        let spec = TypeSpec::new("Point").field("sa", "int").field("ßa", "int");
        let reason = invalid_reason(validate(&spec, "geo"));
        assert!(reason.contains("'ß'"));
    }

    #[test]
    fn test_fields_sharing_exported_name() {
        let spec = TypeSpec::new("Point").field("sa", "int").field("ſa", "int");
        let err = validate(&spec, "geo").unwrap_err();
        assert_eq!(
            err,
            Error::InvalidIdentifier {
                name: "ſa".to_string(),
                context: "Point field".to_string(),
                reason: "exported name 'Sa' is also used by field 'sa'".to_string(),
            }
        );
        assert!(generate_immutable(&spec, "geo").is_err());
    }

    #[test]
    fn test_undeclared_import() {
        let spec = TypeSpec::new("Doc")
            .import(Import::new("time"))
            .field("at", "time.Time")
            .field("r", "io.Reader");
        assert_eq!(
            generate_builder(&spec, "docs").unwrap_err(),
            Error::UndeclaredImport {
                type_name: "Doc".to_string(),
                qualifier: "io".to_string(),
            }
        );
    }

    #[test]
    fn test_empty_field_name() {
        let spec = TypeSpec::new("Point").field("", "int");
        let reason = invalid_reason(validate(&spec, "geo"));
        assert_eq!(reason, "name cannot be empty");
    }

    #[test]
    fn test_field_must_start_lowercase() {
        for name in ["X", "_x"] {
            let spec = TypeSpec::new("Point").field(name, "int");
            let reason = invalid_reason(validate(&spec, "geo"));
            assert_eq!(reason, "name must start with a lower-case letter");
        }
    }

    #[test]
    fn test_keyword_field_name() {
        let spec = TypeSpec::new("Point").field("range", "int");
        let reason = invalid_reason(validate(&spec, "geo"));
        assert_eq!(reason, "name is a Go keyword");
    }

    #[test]
    fn test_duplicate_field() {
        let spec = point().field("x", "float64");
        assert_eq!(
            validate(&spec, "geo").unwrap_err(),
            Error::DuplicateField {
                type_name: "Point".to_string(),
                field: "x".to_string(),
            }
        );
    }

    #[test]
    fn test_empty_field_type() {
        let spec = TypeSpec::new("Point").field("x", "  ");
        assert_eq!(
            validate(&spec, "geo").unwrap_err(),
            Error::EmptyFieldType {
                type_name: "Point".to_string(),
                field: "x".to_string(),
            }
        );
    }

    #[test]
    fn test_field_named_build() {
        let spec = TypeSpec::new("Job").field("build", "string");
        let reason = invalid_reason(validate(&spec, "ci"));
        assert!(reason.contains("Build method"));
    }

    #[test]
    fn test_field_named_as_builder() {
        let spec = TypeSpec::new("Job").field("asBuilder", "bool");
        let reason = invalid_reason(validate(&spec, "ci"));
        assert!(reason.contains("AsBuilder method"));
    }

    #[test]
    fn test_field_colliding_with_setter() {
        let spec = TypeSpec::new("Job")
            .field("name", "string")
            .field("setName", "bool");
        let reason = invalid_reason(validate(&spec, "ci"));
        assert!(reason.contains("setter of field 'name'"));
    }

    #[test]
    fn test_invalid_import_alias() {
        let spec = point().import(Import::named("github.com/x/y", "not-ok"));
        let err = validate(&spec, "geo").unwrap_err();
        assert!(matches!(err, Error::InvalidIdentifier { ref name, .. } if name == "not-ok"));
    }

    #[test]
    fn test_validate_all_duplicate_type() {
        let err = validate_all(&[point(), point()], "geo").unwrap_err();
        assert_eq!(
            err,
            Error::DuplicateType {
                name: "Point".to_string(),
                reason: "another type of the same name".to_string(),
            }
        );
    }

    #[test]
    fn test_validate_all_builder_name_collision() {
        let specs = [TypeSpec::new("Point"), TypeSpec::new("PointBuilder")];
        let err = validate_all(&specs, "geo").unwrap_err();
        assert!(matches!(err, Error::DuplicateType { ref name, .. } if name == "PointBuilder"));
    }

    #[test]
    fn test_validate_all_case_only_collision() {
        let specs = [TypeSpec::new("point"), TypeSpec::new("Point")];
        assert!(matches!(
            validate_all(&specs, "geo"),
            Err(Error::DuplicateType { .. })
        ));
    }

    #[test]
    fn test_validate_all_file_name_collision() {
        let specs = [TypeSpec::new("Foo"), TypeSpec::new("fooBuilder")];
        let err = validate_all(&specs, "geo").unwrap_err();
        assert!(matches!(err, Error::DuplicateType { ref name, .. } if name == "fooBuilder"));
    }

    #[test]
    fn test_validate_all_keeps_order() {
        let specs = [TypeSpec::new("B"), TypeSpec::new("A")];
        let types = validate_all(&specs, "geo").expect("valid");
        let names: Vec<_> = types.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
    }
}
