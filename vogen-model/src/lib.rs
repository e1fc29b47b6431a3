//! Resolution model for the vogen generator.
//!
//! These types are the single source of truth shared between the analysis
//! phases and the Go renderers:
//!
//! ```text
//! Go source → vogen-source (AST) → phases → vogen-model → vogen-codegen-go
//! ```
//!
//! Every collection is insertion ordered so that identical input always
//! renders byte-identical output.

mod import;
mod options;
mod registry;
mod structs;
mod types;

pub use import::{Import, ImportSet};
pub use options::ErrorScope;
pub use registry::{ConstructorEntry, ConstructorRegistry, constructor_key};
use serde::Serialize;
pub use structs::{FieldKind, FieldModel, StructModel};
pub use types::{DeclaredType, TypeCatalog, TypeKind};

/// Everything the analysis produced for one unit.
#[derive(Debug, Clone, Serialize)]
pub struct ResolutionModel {
    /// Go package name of the unit.
    pub package: String,
    pub catalog: TypeCatalog,
    pub structs: Vec<StructModel>,
    pub registry: ConstructorRegistry,
    /// Types that already declare a `RawValue` method.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub raw_value_receivers: Vec<String>,
}

impl ResolutionModel {
    /// Whether a generated constructor for `model` returns `(*S, error)`.
    ///
    /// Under [`ErrorScope::Global`], one error-returning constructor anywhere
    /// in the registry makes every generated constructor fallible.
    pub fn constructor_returns_error(&self, model: &StructModel, scope: ErrorScope) -> bool {
        if scope == ErrorScope::Global {
            return self.registry.any_returns_error();
        }
        model.fields.iter().any(|field| {
            self.registry
                .lookup(&model.name, &field.name)
                .is_some_and(|entry| entry.returns_error)
        })
    }
}

#[cfg(test)]
mod tests {
    use vogen_source::Span;

    use super::*;

    fn field(name: &str) -> FieldModel {
        FieldModel {
            name: name.to_string(),
            declared: "string".to_string(),
            resolved: "string".to_string(),
            kind: FieldKind::Plain,
            resolved_imports: Vec::new(),
            declared_imports: Vec::new(),
            span: Span::default(),
        }
    }

    fn model() -> ResolutionModel {
        let mut registry = ConstructorRegistry::new("New");
        registry.insert(ConstructorEntry {
            name: "NewAddressCity".into(),
            returns_error: true,
        });
        registry.insert(ConstructorEntry {
            name: "NewPersonName".into(),
            returns_error: false,
        });
        let mut address = StructModel::new("Address", Span::default());
        address.fields.push(field("City"));
        let mut person = StructModel::new("Person", Span::default());
        person.fields.push(field("Name"));
        ResolutionModel {
            package: "sample".into(),
            catalog: TypeCatalog::new(),
            structs: vec![address, person],
            registry,
            raw_value_receivers: Vec::new(),
        }
    }

    #[test]
    fn test_global_error_shape() {
        let model = model();
        assert!(model.constructor_returns_error(&model.structs[0], ErrorScope::Global));
        assert!(model.constructor_returns_error(&model.structs[1], ErrorScope::Global));
    }

    #[test]
    fn test_per_struct_error_shape() {
        let model = model();
        assert!(model.constructor_returns_error(&model.structs[0], ErrorScope::PerStruct));
        assert!(!model.constructor_returns_error(&model.structs[1], ErrorScope::PerStruct));
    }
}
