//! Schema validation with source spans.

use std::collections::HashMap;

use genbuilder_core::{
    TypeSpec, is_go_keyword, receiver_name, to_public, type_qualifiers, validate_identifier,
};
use miette::SourceSpan;

use super::Schema;
use crate::{Result, SourceContext};

/// Parsing and validation context that carries source information.
///
/// Tracks the path through the schema (e.g., `["Jason"]` while checking the
/// fields of `Jason`) and the offset where span lookups start, so repeated
/// names resolve to the declaration being checked.
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    source: &'a SourceContext,
    path: Vec<&'a str>,
    offset: usize,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context over the whole source.
    pub fn new(source: &'a SourceContext) -> Self {
        Self {
            source,
            path: Vec::new(),
            offset: 0,
        }
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut path = self.path.clone();
        path.push(segment);
        Self {
            source: self.source,
            path,
            offset: self.offset,
        }
    }

    /// Return a context whose span lookups start at `span`.
    pub fn starting_at(&self, span: Option<SourceSpan>) -> Self {
        Self {
            source: self.source,
            path: self.path.clone(),
            offset: span.map_or(self.offset, |s| s.offset()),
        }
    }

    /// Get a context description for error messages.
    ///
    /// For example: "field in 'Jason'" or just "type" if no path.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path.join("."))
        }
    }

    /// Span of the `nth` string value assigned to `key`, searching from the current offset.
    pub fn find_value_span(&self, key: &str, value: &str, nth: usize) -> Option<SourceSpan> {
        find_value_span(self.source.src(), self.offset, key, value, nth)
    }

    /// Validate that a name is a usable Go identifier.
    pub fn validate_name(&self, name: &str, kind: &str, span: Option<SourceSpan>) -> Result<()> {
        if is_go_keyword(name) {
            return Err(self
                .source
                .reserved_keyword_error(name, self.context_for(kind), span));
        }

        if let Some(reason) = validate_identifier(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                span,
            ));
        }

        Ok(())
    }
}

/// Find `key = "value"` (TOML) or `"key": "value"` (JSON) and return the span of `value`.
///
/// Single-quoted TOML literal strings are matched too.
pub(crate) fn find_value_span(
    src: &str,
    from: usize,
    key: &str,
    value: &str,
    nth: usize,
) -> Option<SourceSpan> {
    let from = from.min(src.len());
    let mut seen = 0;

    for quote in ['"', '\''] {
        let needle = format!("{q}{value}{q}", q = quote);
        let mut search = from;
        while let Some(found) = src.get(search..).and_then(|s| s.find(&needle)) {
            let start = search + found;
            search = start + needle.len();

            if !assigned_to(&src[..start], key) {
                continue;
            }
            if seen == nth {
                return Some(SourceSpan::from((start + 1, value.len())));
            }
            seen += 1;
        }
        if seen > 0 {
            break;
        }
    }

    None
}

/// Whether `before` ends with `key =` / `key:` / `"key":`, ignoring whitespace.
fn assigned_to(before: &str, key: &str) -> bool {
    let before = before.trim_end();
    let Some(before) = before
        .strip_suffix('=')
        .or_else(|| before.strip_suffix(':'))
    else {
        return false;
    };
    let before = before.trim_end();
    let before = before.strip_suffix('"').unwrap_or(before);

    match before.strip_suffix(key) {
        Some(rest) => !rest
            .chars()
            .next_back()
            .is_some_and(|c| c.is_alphanumeric() || c == '_'),
        None => false,
    }
}

/// Validate a parsed schema against its source.
pub(crate) fn validate_schema(schema: &Schema, source: &SourceContext) -> Result<()> {
    let ctx = ParseContext::new(source);

    validate_package(schema, &ctx)?;

    let mut type_occurrences: HashMap<&str, usize> = HashMap::new();
    for spec in &schema.types {
        let nth = type_occurrences.entry(spec.name.as_str()).or_insert(0);
        let span = ctx.find_value_span("name", &spec.name, *nth);

        ctx.validate_name(&spec.name, "type", span)?;
        if let Err(e) = to_public(&spec.name).and_then(|_| receiver_name(&spec.name)) {
            return Err(source.invalid_identifier_error(
                &spec.name,
                ctx.context_for("type"),
                e.to_string(),
                span,
            ));
        }

        if *nth > 0 {
            return Err(source.duplicate_type_error(
                &spec.name,
                ctx.find_value_span("name", &spec.name, 0),
                span,
            ));
        }
        *nth += 1;

        validate_type(spec, &ctx.push(&spec.name).starting_at(span))?;
    }

    Ok(())
}

fn validate_package(schema: &Schema, ctx: &ParseContext) -> Result<()> {
    let dir = schema.output.dir.display().to_string();

    // Dirs like "." name no package on their own; the CLI resolves them later.
    let Some(package) = schema.package_name() else {
        return Ok(());
    };

    let span = match &schema.output.package {
        Some(package) => ctx.find_value_span("package", package, 0),
        None => ctx.find_value_span("dir", &dir, 0),
    };
    ctx.validate_name(&package, "package", span)
}

fn validate_type(spec: &TypeSpec, ctx: &ParseContext) -> Result<()> {
    for import in &spec.imports {
        if let Some(alias) = &import.name {
            let span = ctx.find_value_span("name", alias, 0);
            ctx.validate_name(alias, "import alias", span)?;
        }
    }

    let declared: Vec<&str> = spec.imports.iter().map(|i| i.package_name()).collect();
    let mut exported: HashMap<String, &str> = HashMap::new();
    let mut field_occurrences: HashMap<&str, usize> = HashMap::new();
    for field in &spec.fields {
        let nth = field_occurrences.entry(field.name.as_str()).or_insert(0);
        let span = ctx.find_value_span("name", &field.name, *nth);

        ctx.validate_name(&field.name, "field", span)?;

        if !field.name.chars().next().is_some_and(char::is_lowercase) {
            return Err(ctx.source.invalid_identifier_error(
                &field.name,
                ctx.context_for("field"),
                "field names must start with a lower-case letter",
                span,
            ));
        }

        if *nth > 0 {
            return Err(ctx.source.duplicate_field_error(
                &spec.name,
                &field.name,
                ctx.find_value_span("name", &field.name, 0),
                span,
            ));
        }
        *nth += 1;

        let public = to_public(&field.name).map_err(|e| {
            ctx.source
                .invalid_identifier_error(&field.name, ctx.context_for("field"), e.to_string(), span)
        })?;
        if let Some(other) = exported.insert(public.clone(), &field.name) {
            return Err(ctx.source.invalid_identifier_error(
                &field.name,
                ctx.context_for("field"),
                format!("exported name '{}' is also used by field '{}'", public, other),
                span,
            ));
        }

        if field.type_name.trim().is_empty() {
            return Err(ctx
                .source
                .empty_field_type_error(&spec.name, &field.name, span));
        }

        let type_span = ctx
            .starting_at(span)
            .find_value_span("type", &field.type_name, 0);
        for qualifier in type_qualifiers(&field.type_name) {
            if !declared.contains(&qualifier) {
                return Err(ctx.source.undeclared_import_error(
                    &spec.name,
                    qualifier,
                    type_span,
                ));
            }
        }
    }

    Ok(())
}
