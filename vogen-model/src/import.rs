//! Import tracking.

use indexmap::IndexMap;
use serde::Serialize;

/// A Go import, optionally aliased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Import {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

impl Import {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            alias: None,
        }
    }

    pub fn aliased(path: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            alias: Some(alias.into()),
        }
    }
}

/// Deduplicated set of imports.
///
/// Keyed by path; the first alias seen for a path is kept. Rendering order is
/// sorted by path regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSet {
    imports: IndexMap<String, Option<String>>,
}

impl ImportSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, import: &Import) {
        self.imports
            .entry(import.path.clone())
            .or_insert_with(|| import.alias.clone());
    }

    /// Add an unaliased import by path.
    pub fn add_path(&mut self, path: &str) {
        self.imports.entry(path.to_string()).or_insert(None);
    }

    pub fn extend<'a>(&mut self, imports: impl IntoIterator<Item = &'a Import>) {
        for import in imports {
            self.add(import);
        }
    }

    pub fn merge(&mut self, other: &ImportSet) {
        for (path, alias) in &other.imports {
            self.imports
                .entry(path.clone())
                .or_insert_with(|| alias.clone());
        }
    }

    pub fn contains(&self, path: &str) -> bool {
        self.imports.contains_key(path)
    }

    /// Imports sorted by path.
    pub fn sorted(&self) -> Vec<Import> {
        let mut imports: Vec<Import> = self
            .imports
            .iter()
            .map(|(path, alias)| Import {
                path: path.clone(),
                alias: alias.clone(),
            })
            .collect();
        imports.sort_by(|a, b| a.path.cmp(&b.path));
        imports
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    pub fn len(&self) -> usize {
        self.imports.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_collapse() {
        let mut set = ImportSet::new();
        set.add_path("time");
        set.add(&Import::new("time"));
        set.add_path("github.com/google/uuid");
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_sorted_by_path() {
        let mut set = ImportSet::new();
        set.add_path("time");
        set.add_path("github.com/google/uuid");
        set.add_path("testing");
        let paths: Vec<_> = set.sorted().into_iter().map(|i| i.path).collect();
        assert_eq!(paths, vec!["github.com/google/uuid", "testing", "time"]);
    }

    #[test]
    fn test_first_alias_wins() {
        let mut set = ImportSet::new();
        set.add(&Import::aliased("github.com/google/uuid", "u"));
        set.add(&Import::new("github.com/google/uuid"));
        assert_eq!(
            set.sorted(),
            vec![Import::aliased("github.com/google/uuid", "u")]
        );
    }

    #[test]
    fn test_merge() {
        let mut a = ImportSet::new();
        a.add_path("time");
        let mut b = ImportSet::new();
        b.add_path("time");
        b.add_path("testing");
        a.merge(&b);
        assert!(a.contains("testing"));
        assert_eq!(a.len(), 2);
    }
}
