//! Hand-written constructor registry.

use indexmap::IndexMap;
use serde::Serialize;
use vogen_core::to_pascal_case;

/// Name of the per-field constructor the generator looks for.
///
/// Registry population and constructor generation both go through this
/// function, so the two can never disagree on the naming convention.
pub fn constructor_key(prefix: &str, struct_name: &str, field_name: &str) -> String {
    format!(
        "{}{}{}",
        to_pascal_case(prefix),
        to_pascal_case(struct_name),
        to_pascal_case(field_name)
    )
}

/// A hand-written constructor found in the unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConstructorEntry {
    pub name: String,
    /// Signature is `(v) (T, error)` rather than `(v) T`.
    pub returns_error: bool,
}

/// Constructors keyed by function name, in declaration order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConstructorRegistry {
    pub prefix: String,
    entries: IndexMap<String, ConstructorEntry>,
}

impl ConstructorRegistry {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            entries: IndexMap::new(),
        }
    }

    /// Record an entry. A name seen before keeps its first entry.
    pub fn insert(&mut self, entry: ConstructorEntry) {
        self.entries.entry(entry.name.clone()).or_insert(entry);
    }

    pub fn get(&self, name: &str) -> Option<&ConstructorEntry> {
        self.entries.get(name)
    }

    /// Constructor for one field of a struct, by naming convention.
    pub fn lookup(&self, struct_name: &str, field_name: &str) -> Option<&ConstructorEntry> {
        self.get(&constructor_key(&self.prefix, struct_name, field_name))
    }

    pub fn any_returns_error(&self) -> bool {
        self.entries.values().any(|entry| entry.returns_error)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConstructorEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructor_key() {
        assert_eq!(constructor_key("New", "Address", "Number"), "NewAddressNumber");
        assert_eq!(constructor_key("new", "address", "number2p"), "NewAddressNumber2p");
        assert_eq!(constructor_key("", "Person", "Name"), "PersonName");
    }

    #[test]
    fn test_lookup_uses_key() {
        let mut registry = ConstructorRegistry::new("new");
        registry.insert(ConstructorEntry {
            name: "NewPersonName".into(),
            returns_error: false,
        });
        assert!(registry.lookup("Person", "name").is_some());
        assert!(registry.lookup("Person", "Age").is_none());
        assert!(!registry.any_returns_error());
    }

    #[test]
    fn test_first_entry_wins() {
        let mut registry = ConstructorRegistry::new("New");
        registry.insert(ConstructorEntry {
            name: "NewA".into(),
            returns_error: true,
        });
        registry.insert(ConstructorEntry {
            name: "NewA".into(),
            returns_error: false,
        });
        assert_eq!(registry.len(), 1);
        assert!(registry.any_returns_error());
    }
}
