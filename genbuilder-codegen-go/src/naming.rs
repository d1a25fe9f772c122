//! Go names derived from a type description.

use genbuilder_codegen::ImportCollector;
use genbuilder_core::{FieldDescriptor, NamingError, TypeSpec, receiver_name, to_private, to_public};

use crate::Error;

/// Every name the two generated files need for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoField {
    /// Unexported member of the immutable type (`integer32`).
    pub name: String,
    /// Exported builder member and getter name (`Integer32`).
    pub public: String,
    /// Setter parameter; never equal to the receiver.
    pub param: String,
    /// Type expression, verbatim.
    pub ty: String,
}

impl GoField {
    fn derive(field: &FieldDescriptor, receiver: &str) -> Result<Self, NamingError> {
        let param = if field.name == receiver {
            format!("{}Value", field.name)
        } else {
            field.name.clone()
        };

        Ok(Self {
            name: field.name.clone(),
            public: to_public(&field.name)?,
            param,
            ty: field.type_name.clone(),
        })
    }

    /// `Set<Public>`
    pub fn setter(&self) -> String {
        format!("Set{}", self.public)
    }
}

/// Every name the two generated files need for one type.
#[derive(Debug, Clone)]
pub struct GoType {
    /// Immutable type name, verbatim (`Jason`).
    pub name: String,
    /// `Jason` -> `JasonBuilder`
    pub builder: String,
    /// Receiver shared by both types' methods.
    pub receiver: String,
    pub fields: Vec<GoField>,
    /// Declared imports some field type references.
    pub imports: ImportCollector,
    public: String,
    private: String,
}

impl GoType {
    /// Derive names for an already validated type.
    pub(crate) fn derive(spec: &TypeSpec, imports: ImportCollector) -> Result<Self, Error> {
        let invalid = |e: NamingError| Error::invalid(&spec.name, "type name", e.to_string());

        let public = to_public(&spec.name).map_err(invalid)?;
        let private = to_private(&spec.name).map_err(invalid)?;
        let receiver = receiver_name(&spec.name).map_err(invalid)?;

        let fields = spec
            .fields
            .iter()
            .map(|f| {
                GoField::derive(f, &receiver).map_err(|e| {
                    Error::invalid(&f.name, field_context(&spec.name), e.to_string())
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            name: spec.name.clone(),
            builder: format!("{}Builder", public),
            receiver,
            fields,
            imports,
            public,
            private,
        })
    }

    /// `NewJason`
    pub fn constructor(&self) -> String {
        format!("New{}", self.public)
    }

    /// `NewJasonBuilder`
    pub fn builder_constructor(&self) -> String {
        format!("New{}", self.builder)
    }

    /// `jason.go`
    pub fn file_name(&self) -> String {
        format!("{}.go", self.private)
    }

    /// `jasonbuilder.go`
    pub fn builder_file_name(&self) -> String {
        format!("{}builder.go", self.private)
    }

    /// Package-level identifiers this type declares.
    pub fn declared_identifiers(&self) -> [String; 4] {
        [
            self.name.clone(),
            self.builder.clone(),
            self.constructor(),
            self.builder_constructor(),
        ]
    }
}

pub(crate) fn field_context(type_name: &str) -> String {
    format!("{} field", type_name)
}
