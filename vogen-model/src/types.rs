//! Declared type catalog.

use indexmap::IndexMap;
use serde::Serialize;
use vogen_source::Span;

use crate::Import;

/// How a declared type reduces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeKind {
    /// Reduces to a predeclared type such as `int` or `*string`.
    PrimitiveAlias,
    /// `type X *Y` where `Y` is itself catalogued.
    PointerToDefined { pointee: String },
    /// Reduces to a type from another package, kept unreduced.
    QualifiedExternal,
    /// Anything else: composite shapes, structs, undeclared names.
    Opaque,
}

/// A catalogued type declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeclaredType {
    pub name: String,
    #[serde(flatten)]
    pub kind: TypeKind,
    /// Root representation, as written in generated Go code.
    pub underlying: String,
    /// Imports needed to write `underlying`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub imports: Vec<Import>,
    #[serde(skip)]
    pub span: Span,
}

impl DeclaredType {
    pub fn is_pointer(&self) -> bool {
        self.underlying.starts_with('*')
    }

    /// Whether a `RawValue()` accessor can be generated for this type.
    ///
    /// The conversion `Root(d)` is only valid for non-pointer primitive and
    /// external roots; interface roots are excluded.
    pub fn supports_raw_value(&self) -> bool {
        let convertible = matches!(
            self.kind,
            TypeKind::PrimitiveAlias | TypeKind::QualifiedExternal
        );
        convertible && !self.is_pointer() && !matches!(self.underlying.as_str(), "error" | "any")
    }
}

/// Declared name → resolved type, in declaration order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct TypeCatalog {
    types: IndexMap<String, DeclaredType>,
}

impl TypeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, ty: DeclaredType) {
        self.types.insert(ty.name.clone(), ty);
    }

    pub fn get(&self, name: &str) -> Option<&DeclaredType> {
        self.types.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Root representation of `name`, when it is catalogued.
    pub fn root(&self, name: &str) -> Option<&str> {
        self.get(name).map(|ty| ty.underlying.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &DeclaredType> {
        self.types.values()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
