//! Go AST builders for generating type declarations, functions, and literals.
//!
//! These provide a high-level API for constructing Go syntax,
//! which can then be rendered via CodeBuilder.

mod funcs;
mod literal;
mod structs;

pub use funcs::{Func, Param};
pub use literal::CompositeLiteral;
pub use structs::{Field, Struct};

/// Lay out `(left, right)` pairs in two columns the way gofmt does.
///
/// The right column starts one space past the widest left cell.
pub(crate) fn align_columns<'a>(
    rows: impl IntoIterator<Item = (&'a str, &'a str)>,
    suffix: &str,
) -> Vec<String> {
    let rows: Vec<_> = rows.into_iter().collect();
    let width = rows
        .iter()
        .map(|(left, _)| left.chars().count())
        .max()
        .unwrap_or(0);

    rows.into_iter()
        .map(|(left, right)| {
            let pad = width - left.chars().count() + 1;
            format!("{}{}{}{}", left, " ".repeat(pad), right, suffix)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_columns() {
        let lines = align_columns([("T", "time.Time"), ("Integer32", "int32")], "");
        assert_eq!(lines, vec!["T         time.Time", "Integer32 int32"]);
    }

    #[test]
    fn test_align_columns_counts_chars() {
        let lines = align_columns([("größe", "int"), ("ab", "int")], ",");
        assert_eq!(lines, vec!["größe int,", "ab    int,"]);
    }
}
