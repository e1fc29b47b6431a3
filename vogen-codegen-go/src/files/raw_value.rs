//! `RawValue()` accessors for defined types and target structs.

use vogen_codegen::{CodeFragment, Renderable};
use vogen_core::to_pascal_case;
use vogen_model::{DeclaredType, FieldModel, ResolutionModel, StructModel};

use crate::{CompositeLit, Field, Func, Param, StructType};

/// Catalogued types that get an accessor, in first-reference order.
///
/// Only types referenced directly by a target struct field qualify, and
/// only when the conversion back to the root is valid and the unit does not
/// already declare a `RawValue` method on the type.
pub fn raw_value_types(model: &ResolutionModel) -> Vec<&DeclaredType> {
    let mut types: Vec<&DeclaredType> = Vec::new();
    let fields = model.structs.iter().flat_map(|s| &s.fields);
    for name in fields.filter_map(|f| f.defined_type()) {
        let Some(ty) = model.catalog.get(name) else {
            continue;
        };
        if !ty.supports_raw_value()
            || model.raw_value_receivers.iter().any(|r| r == name)
            || types.iter().any(|t| t.name == name)
        {
            continue;
        }
        types.push(ty);
    }
    types
}

/// `func (d T) RawValue() Root { return Root(d) }`
pub fn raw_value_accessor(ty: &DeclaredType) -> Func {
    Func::new("RawValue")
        .receiver(Param::new("d", &ty.name))
        .returns(&ty.underlying)
        .body_line(format!("return {}(d)", ty.underlying))
}

/// Target structs that get a struct-level accessor, skipping those that
/// already declare a `RawValue` method.
pub fn raw_value_structs(model: &ResolutionModel) -> Vec<&StructModel> {
    model
        .structs
        .iter()
        .filter(|s| !model.raw_value_receivers.contains(&s.name))
        .collect()
}

/// `type rawS struct { ... }` and `func (d S) RawValue() rawS`.
///
/// Fields whose type gets a generated accessor are unwrapped to their root;
/// every other field is copied as declared.
pub struct RawStruct<'a> {
    target: &'a StructModel,
    accessors: &'a [&'a DeclaredType],
}

impl<'a> RawStruct<'a> {
    /// `accessors` is the output of [`raw_value_types`] for the same model.
    pub fn new(target: &'a StructModel, accessors: &'a [&'a DeclaredType]) -> Self {
        Self { target, accessors }
    }

    pub fn type_name(&self) -> String {
        format!("raw{}", to_pascal_case(&self.target.name))
    }

    fn accessor(&self, field: &FieldModel) -> Option<&DeclaredType> {
        let name = field.defined_type()?;
        self.accessors.iter().copied().find(|ty| ty.name == name)
    }

    /// Fields copied as declared; their declared imports must be present.
    pub fn passthrough_fields(&self) -> impl Iterator<Item = &'a FieldModel> + '_ {
        self.target
            .fields
            .iter()
            .filter(|field| self.accessor(field).is_none())
    }
}

impl Renderable for RawStruct<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let raw = self.type_name();
        let mut ty = StructType::new(&raw);
        let mut literal = CompositeLit::new(&raw).prefix("return ");
        for field in &self.target.fields {
            match self.accessor(field) {
                Some(declared) => {
                    ty = ty.field(Field::new(&field.name, &declared.underlying));
                    literal = literal.elem(&field.name, format!("d.{}.RawValue()", field.name));
                }
                None => {
                    ty = ty.field(Field::new(&field.name, &field.declared));
                    literal = literal.elem(&field.name, format!("d.{}", field.name));
                }
            }
        }

        let method = Func::new("RawValue")
            .receiver(Param::new("d", &self.target.name))
            .returns(&raw)
            .body(literal.to_fragments());

        let mut fragments = ty.to_fragments();
        fragments.push(CodeFragment::blank());
        fragments.extend(method.to_fragments());
        fragments
    }
}
