use thiserror::Error;

/// Reasons a type cannot be turned into Go source.
///
/// All of these are detected before any text is emitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid {context} '{name}': {reason}")]
    InvalidIdentifier {
        name: String,
        context: String,
        reason: String,
    },

    #[error("type '{type_name}' declares field '{field}' more than once")]
    DuplicateField { type_name: String, field: String },

    #[error("field '{field}' of type '{type_name}' has an empty type")]
    EmptyFieldType { type_name: String, field: String },

    #[error("type '{name}' collides with {reason}")]
    DuplicateType { name: String, reason: String },

    #[error("type '{type_name}' uses package '{qualifier}' but declares no import for it")]
    UndeclaredImport { type_name: String, qualifier: String },
}

impl Error {
    pub(crate) fn invalid(
        name: impl Into<String>,
        context: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidIdentifier {
            name: name.into(),
            context: context.into(),
            reason: reason.into(),
        }
    }
}
