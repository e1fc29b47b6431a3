//! Shared naming helpers for Go identifiers.
//!
//! Go identifiers are already camel-cased by convention, so both helpers only
//! touch the first character and leave the rest of the name alone.

/// Upper-case the first character (e.g., "createdAt" -> "CreatedAt")
pub fn to_pascal_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Lower-case the first character (e.g., "CreatedAt" -> "createdAt")
pub fn to_camel_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}
