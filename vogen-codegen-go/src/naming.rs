//! Go-specific naming conventions.

use vogen_codegen::NamingConvention;
use vogen_core::{to_camel_case, to_pascal_case};

fn escape_go_reserved(name: &str) -> String {
    format!("{}_", name)
}

/// Go naming conventions.
///
/// Besides the keywords, `err` and `nil` are reserved because generated
/// constructor bodies refer to them.
pub const GO_NAMING: NamingConvention = NamingConvention {
    to_exported: to_pascal_case,
    to_local: to_camel_case,
    reserved_words: &[
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
        "err",
        "nil",
    ],
    escape_reserved: escape_go_reserved,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_go_local_names() {
        assert_eq!(GO_NAMING.local_name("CreatedAt"), "createdAt");
        assert_eq!(GO_NAMING.local_name("Number2p"), "number2p");
    }

    #[test]
    fn test_go_reserved_words() {
        assert!(GO_NAMING.is_reserved("type"));
        assert!(GO_NAMING.is_reserved("err"));
        assert!(!GO_NAMING.is_reserved("name"));
    }

    #[test]
    fn test_go_escape_reserved() {
        assert_eq!(GO_NAMING.local_name("Type"), "type_");
        assert_eq!(GO_NAMING.local_name("Err"), "err_");
        assert_eq!(GO_NAMING.local_name("Range"), "range_");
    }

    #[test]
    fn test_go_exported_names() {
        assert_eq!(GO_NAMING.exported_name("number2p"), "Number2p");
    }
}
