//! Target struct models.

use serde::Serialize;
use vogen_source::Span;

use crate::Import;

/// How a field's declared type was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// A catalogued type, reduced to its root.
    Defined,
    /// A bare identifier that is not catalogued (predeclared, struct, unknown).
    Plain,
    /// `pkg.T`, kept as written.
    Qualified,
    /// Any other shape, kept as written.
    Verbatim,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldModel {
    pub name: String,
    /// Type as written in the struct.
    pub declared: String,
    /// Type a caller passes to the generated constructor.
    pub resolved: String,
    pub kind: FieldKind,
    /// Imports needed to write `resolved`.
    pub resolved_imports: Vec<Import>,
    /// Imports needed to write `declared`.
    pub declared_imports: Vec<Import>,
    #[serde(skip)]
    pub span: Span,
}

impl FieldModel {
    /// The field's declared type when it is a catalogued defined type.
    pub fn defined_type(&self) -> Option<&str> {
        match self.kind {
            FieldKind::Defined => Some(&self.declared),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructModel {
    pub name: String,
    /// Declaration order; becomes parameter order.
    pub fields: Vec<FieldModel>,
    #[serde(skip)]
    pub span: Span,
}

impl StructModel {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            span,
        }
    }
}
