//! Registry phase - collects hand-written constructors.

use vogen_core::to_pascal_case;
use vogen_model::{ConstructorEntry, ConstructorRegistry};
use vogen_source::{Result, Signature, TypeExpr};

use crate::pipeline::{CompilationContext, Phase};

/// Name of the accessor method the raw value generator emits.
const RAW_VALUE_METHOD: &str = "RawValue";

/// Phase that builds the [`ConstructorRegistry`].
///
/// A top-level function qualifies when its name starts with the Pascal-cased
/// prefix, it takes exactly one non-variadic parameter and it returns `T` or
/// `(T, error)`. Methods never qualify, but receivers of existing `RawValue`
/// methods are recorded so the accessor is not generated twice.
pub struct RegistryPhase;

impl Phase for RegistryPhase {
    fn name(&self) -> &'static str {
        "registry"
    }

    fn description(&self) -> &'static str {
        "Collect hand-written per-field constructors"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let prefix = to_pascal_case(&ctx.options.prefix);
        let mut registry = ConstructorRegistry::new(ctx.options.prefix.clone());
        let mut receivers: Vec<String> = Vec::new();

        for func in ctx.file.funcs() {
            if let Some(receiver) = &func.receiver {
                if func.name.name == RAW_VALUE_METHOD
                    && let Some(name) = receiver_type_name(&receiver.ty)
                    && !receivers.iter().any(|r| r == name)
                {
                    receivers.push(name.to_string());
                }
                continue;
            }

            if !func.name.name.starts_with(&prefix) {
                continue;
            }
            if let Some(returns_error) = constructor_shape(&func.signature) {
                registry.insert(ConstructorEntry {
                    name: func.name.name.clone(),
                    returns_error,
                });
            }
        }

        ctx.registry = Some(registry);
        ctx.raw_value_receivers = receivers;
        Ok(())
    }
}

/// `Some(returns_error)` for `func(v) T` and `func(v) (T, error)`.
fn constructor_shape(signature: &Signature) -> Option<bool> {
    match signature.params.as_slice() {
        [param] if !param.variadic => {}
        _ => return None,
    }
    match signature.results.as_slice() {
        [_] => Some(false),
        [_, err] if err.ty.as_ident() == Some("error") => Some(true),
        _ => None,
    }
}

/// `T` for receivers written `T`, `*T` or `T[K]`.
fn receiver_type_name(ty: &TypeExpr) -> Option<&str> {
    match ty {
        TypeExpr::Named {
            qualifier: None,
            name,
            ..
        } => Some(name),
        TypeExpr::Pointer(elem) => receiver_type_name(elem),
        _ => None,
    }
}
