//! Go identifier rules.

/// Go keywords that cannot be used as identifiers.
/// Source: https://go.dev/ref/spec#Keywords
pub const GO_KEYWORDS: &[&str] = &[
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

/// Check if a name is a Go keyword.
pub fn is_go_keyword(name: &str) -> bool {
    GO_KEYWORDS.contains(&name)
}

// Letter-like numerals (`Ⅻ`) are alphabetic to Rust but not letters to Go.
fn is_ident_start(c: char) -> bool {
    c == '_' || (c.is_alphabetic() && !c.is_numeric())
}

// Go accepts any decimal digit; only ASCII ones are allowed here, which
// keeps `²` and other non-decimal numerics out.
fn is_ident_char(c: char) -> bool {
    is_ident_start(c) || c.is_ascii_digit()
}

/// Validate that a name is a valid Go identifier.
/// Returns None if valid, Some(reason) if invalid.
pub fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        None => return Some("name cannot be empty"),
        Some(c) if !is_ident_start(c) => {
            return Some("name must start with a letter or underscore");
        }
        Some(_) => {}
    }

    if !chars.all(is_ident_char) {
        return Some("name must contain only letters, digits, and underscores");
    }

    if is_go_keyword(name) {
        return Some("name is a Go keyword");
    }

    None
}

/// Package qualifiers referenced by a Go type expression, in order of first use.
///
/// `map[string]*time.Time` yields `["time"]`, `func(io.Reader) sql.Result`
/// yields `["io", "sql"]`.
pub fn type_qualifiers(expr: &str) -> Vec<&str> {
    let mut found: Vec<&str> = Vec::new();
    let mut start: Option<usize> = None;
    let mut chars = expr.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if is_ident_char(c) {
            start.get_or_insert(i);
            continue;
        }

        let Some(s) = start.take() else {
            continue;
        };
        let word = &expr[s..i];
        let followed_by_ident = chars.peek().is_some_and(|&(_, n)| is_ident_start(n));
        let starts_like_ident = word.chars().next().is_some_and(is_ident_start);

        if c == '.' && followed_by_ident && starts_like_ident && !found.contains(&word) {
            found.push(word);
        }
    }

    found
}
