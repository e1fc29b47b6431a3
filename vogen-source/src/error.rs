use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::Span;

/// Result type for vogen-source operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the unit's content and filename so that every stage after
/// parsing can attribute an error to a location in the Go file.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a lexical error.
    pub fn lex_error(&self, message: impl Into<String>, span: Span) -> Box<Error> {
        Box::new(Error::Lex {
            src: self.named_source(),
            span: span.into(),
            message: message.into(),
        })
    }

    /// Create a parse error for an unexpected token.
    pub fn parse_error(
        &self,
        expected: impl Into<String>,
        found: impl Into<String>,
        span: Span,
    ) -> Box<Error> {
        Box::new(Error::Parse {
            src: self.named_source(),
            span: span.into(),
            expected: expected.into(),
            found: found.into(),
        })
    }

    /// Create an error for a struct field that has no name.
    pub fn anonymous_field_error(
        &self,
        struct_name: impl Into<String>,
        field_type: impl Into<String>,
        span: Span,
    ) -> Box<Error> {
        Box::new(Error::AnonymousField {
            src: self.named_source(),
            span: span.into(),
            struct_name: struct_name.into(),
            field_type: field_type.into(),
        })
    }

    /// Create an error for a type that (indirectly) refers to itself.
    pub fn alias_cycle_error(&self, chain: &[String], span: Span) -> Box<Error> {
        Box::new(Error::AliasCycle {
            src: self.named_source(),
            span: span.into(),
            name: chain.first().cloned().unwrap_or_default(),
            chain: chain.join(" -> "),
        })
    }

    /// Create an error for a requested struct that declares type parameters.
    pub fn generic_struct_error(&self, name: impl Into<String>, span: Span) -> Box<Error> {
        Box::new(Error::GenericStruct {
            src: self.named_source(),
            span: span.into(),
            name: name.into(),
        })
    }

    /// Create an error for a run where none of the requested structs exist.
    pub fn no_matching_structs_error(&self, requested: &[String], available: &[String]) -> Box<Error> {
        let available = if available.is_empty() {
            "none".to_string()
        } else {
            available.join(", ")
        };
        Box::new(Error::NoMatchingStructs {
            filename: self.filename.clone(),
            requested: requested.join(", "),
            available,
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("check that --path points at a Go source file"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(vogen::lex_error))]
    Lex {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: SourceSpan,
        message: String,
    },

    #[error("expected {expected}, found {found}")]
    #[diagnostic(code(vogen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("unexpected {found}")]
        span: SourceSpan,
        expected: String,
        found: String,
    },

    #[error("struct '{struct_name}' has an embedded field of type '{field_type}'")]
    #[diagnostic(
        code(vogen::anonymous_field),
        help("constructors need a parameter name per field; give the field a name")
    )]
    AnonymousField {
        #[source_code]
        src: NamedSource<String>,
        #[label("embedded field")]
        span: SourceSpan,
        struct_name: String,
        field_type: String,
    },

    #[error("type '{name}' refers to itself: {chain}")]
    #[diagnostic(
        code(vogen::alias_cycle),
        help("break the cycle so the type reduces to a primitive or qualified type")
    )]
    AliasCycle {
        #[source_code]
        src: NamedSource<String>,
        #[label("cycle starts here")]
        span: SourceSpan,
        name: String,
        chain: String,
    },

    #[error("struct '{name}' declares type parameters")]
    #[diagnostic(
        code(vogen::generic_struct),
        help("generic structs are not supported; remove '{name}' from --structs")
    )]
    GenericStruct {
        #[source_code]
        src: NamedSource<String>,
        #[label("generic struct")]
        span: SourceSpan,
        name: String,
    },

    #[error("none of the requested structs ({requested}) are declared in '{filename}'")]
    #[diagnostic(
        code(vogen::no_matching_structs),
        help("structs declared in this file: {available}")
    )]
    NoMatchingStructs {
        filename: String,
        requested: String,
        available: String,
    },

    #[error("phase '{phase}' requires {requires}")]
    #[diagnostic(code(vogen::internal))]
    PhaseOrder {
        phase: &'static str,
        requires: &'static str,
    },
}

impl Error {
    /// Create an I/O error for the given path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }

    /// Create an error for a phase that ran before its inputs were available
    pub fn phase_order(phase: &'static str, requires: &'static str) -> Box<Self> {
        Box::new(Error::PhaseOrder { phase, requires })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_message() {
        let ctx = SourceContext::new("package main\ntype", "main.go");
        let err = ctx.parse_error("type name", "end of file", Span::new(17, 0));
        assert_eq!(err.to_string(), "expected type name, found end of file");
    }

    #[test]
    fn test_alias_cycle_message() {
        let ctx = SourceContext::new("type A B\ntype B A\n", "cycle.go");
        let chain = vec!["A".to_string(), "B".to_string(), "A".to_string()];
        let err = ctx.alias_cycle_error(&chain, Span::new(5, 1));
        assert_eq!(err.to_string(), "type 'A' refers to itself: A -> B -> A");
    }

    #[test]
    fn test_no_matching_structs_lists_available() {
        let ctx = SourceContext::new("", "person.go");
        let err = ctx.no_matching_structs_error(&["Missing".to_string()], &["Person".to_string()]);
        match *err {
            Error::NoMatchingStructs {
                ref requested,
                ref available,
                ..
            } => {
                assert_eq!(requested, "Missing");
                assert_eq!(available, "Person");
            }
            ref other => panic!("unexpected error: {other:?}"),
        }
    }
}
