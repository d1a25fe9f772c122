//! Casing helpers that map identifiers between Go's exported and unexported forms.

use thiserror::Error;

/// Failure to derive a cased identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NamingError {
    #[error("identifier cannot be empty")]
    Empty,

    #[error("'{0}' has no single upper-case form, so the name cannot be exported")]
    NoUpperCase(char),

    #[error("'{0}' does not lower-case to a letter usable as a method receiver")]
    NoReceiver(char),
}

/// Upper-case the first character of `name` (e.g., "integer32" -> "Integer32").
///
/// All other characters are left untouched. The initial must map to exactly
/// one upper-case character; `ß` (which becomes "SS") and uncased letters
/// such as `ª` or `日` are rejected.
pub fn to_public(name: &str) -> Result<String, NamingError> {
    let first = name.chars().next().ok_or(NamingError::Empty)?;
    match single(first.to_uppercase()) {
        Some(upper) if upper.is_uppercase() => Ok(replace_first(name, upper)),
        _ => Err(NamingError::NoUpperCase(first)),
    }
}

/// Lower-case the first character of `name` (e.g., "JasonBuilder" -> "jasonBuilder").
pub fn to_private(name: &str) -> Result<String, NamingError> {
    let first = name.chars().next().ok_or(NamingError::Empty)?;
    let lower = first.to_lowercase().next().unwrap_or(first);
    Ok(replace_first(name, lower))
}

/// Receiver name used by every method of a generated type: its lower-cased initial.
///
/// Both `Jason` and `JasonBuilder` get the receiver `j`. The initial must
/// lower-case to a single letter; `_Point` and `İtem` have no usable receiver.
pub fn receiver_name(type_name: &str) -> Result<String, NamingError> {
    let first = type_name.chars().next().ok_or(NamingError::Empty)?;
    match single(first.to_lowercase()) {
        Some(lower) if lower.is_alphabetic() && !lower.is_numeric() => Ok(lower.to_string()),
        _ => Err(NamingError::NoReceiver(first)),
    }
}

fn single(mut mapped: impl Iterator<Item = char>) -> Option<char> {
    match (mapped.next(), mapped.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn replace_first(name: &str, first: char) -> String {
    let mut chars = name.chars();
    chars.next();
    let mut out = String::with_capacity(name.len() + first.len_utf8());
    out.push(first);
    out.extend(chars);
    out
}
