//! Import collection utilities.

use indexmap::IndexMap;

/// Tracks imports and deduplicates them.
///
/// Each import is keyed by its path and may carry an alias. Insertion order is
/// kept; [`ImportCollector::sorted`] yields the order gofmt expects.
///
/// # Example
///
/// ```
/// use genbuilder_codegen::generation::ImportCollector;
///
/// let mut imports = ImportCollector::new();
/// imports.add("time");
/// imports.add("io");
/// imports.add_named("github.com/acme/widgets/v2", "widgets");
/// imports.add("time");
///
/// let paths: Vec<&str> = imports.sorted().into_iter().map(|(path, _)| path).collect();
/// assert_eq!(paths, vec!["github.com/acme/widgets/v2", "io", "time"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    /// Import path -> optional alias
    imports: IndexMap<String, Option<String>>,
}

impl ImportCollector {
    /// Create a new empty import collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an unaliased import. Adding a path twice is a no-op.
    pub fn add(&mut self, path: &str) {
        self.imports.entry(path.to_string()).or_insert(None);
    }

    /// Add an aliased import. A later alias for the same path replaces the earlier one.
    pub fn add_named(&mut self, path: &str, alias: &str) {
        self.imports.insert(path.to_string(), Some(alias.to_string()));
    }

    /// Iterate over all imports in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.imports
            .iter()
            .map(|(path, alias)| (path.as_str(), alias.as_deref()))
    }

    /// All imports sorted by path.
    pub fn sorted(&self) -> Vec<(&str, Option<&str>)> {
        let mut imports: Vec<_> = self.iter().collect();
        imports.sort_by(|a, b| a.0.cmp(b.0));
        imports
    }

    /// Check if the collector is empty.
    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deduplicates_paths() {
        let mut imports = ImportCollector::new();
        imports.add("time");
        imports.add("time");
        assert_eq!(imports.sorted(), vec![("time", None)]);
    }

    #[test]
    fn test_keeps_insertion_order() {
        let mut imports = ImportCollector::new();
        imports.add("time");
        imports.add("io");
        let paths: Vec<_> = imports.iter().map(|(path, _)| path).collect();
        assert_eq!(paths, vec!["time", "io"]);
    }

    #[test]
    fn test_alias_wins_over_plain() {
        let mut imports = ImportCollector::new();
        imports.add("github.com/x/y/v2");
        imports.add_named("github.com/x/y/v2", "y");
        imports.add("github.com/x/y/v2");
        assert_eq!(imports.sorted(), vec![("github.com/x/y/v2", Some("y"))]);
    }

    #[test]
    fn test_later_alias_replaces_earlier() {
        let mut imports = ImportCollector::new();
        imports.add_named("encoding/json", "stdjson");
        imports.add_named("encoding/json", "js");
        assert_eq!(imports.sorted(), vec![("encoding/json", Some("js"))]);
    }

    #[test]
    fn test_empty() {
        let imports = ImportCollector::new();
        assert!(imports.is_empty());
        assert!(imports.sorted().is_empty());
    }
}
