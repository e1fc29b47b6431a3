//! Naming conventions for generated identifiers.

/// Language-specific naming conventions.
///
/// Defines how field names become exported and local identifiers, and how
/// names that clash with the language are escaped.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a name to an exported identifier (e.g., "number2p" -> "Number2p")
    pub to_exported: fn(&str) -> String,
    /// Transform a name to a local identifier (e.g., "CreatedAt" -> "createdAt")
    pub to_local: fn(&str) -> String,
    /// Names a local identifier must not take
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "type" -> "type_" in Go)
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Transform to an exported identifier. Exported names never clash with
    /// keywords, so no escaping is applied.
    pub fn exported_name(&self, name: &str) -> String {
        (self.to_exported)(name)
    }

    /// Transform and make safe for use as a parameter or variable name.
    pub fn local_name(&self, name: &str) -> String {
        let transformed = (self.to_local)(name);
        self.safe_name(&transformed)
    }
}
