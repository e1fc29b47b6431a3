//! The `<base>_vo_gen.go` file: struct constructors and raw value accessors.

use std::path::PathBuf;

use vogen_codegen::{CodeFragment, GenerateOptions, Renderable};
use vogen_core::{GeneratedFile, to_pascal_case};
use vogen_model::{ConstructorEntry, ImportSet, ResolutionModel, StructModel};

use super::raw_value::{RawStruct, raw_value_accessor, raw_value_structs, raw_value_types};
use crate::{CompositeLit, Func, GO_NAMING, GoFile, Param};

/// Prefix of the temporaries that hold sub-constructor results.
const TEMP_PREFIX: &str = "vogen";

/// Constructor file for every target struct.
pub struct ConstructorFile<'a> {
    path: PathBuf,
    model: &'a ResolutionModel,
    options: &'a GenerateOptions,
}

impl<'a> ConstructorFile<'a> {
    pub fn new(
        path: impl Into<PathBuf>,
        model: &'a ResolutionModel,
        options: &'a GenerateOptions,
    ) -> Self {
        Self {
            path: path.into(),
            model,
            options,
        }
    }

    fn imports(&self) -> ImportSet {
        let mut imports = ImportSet::new();
        for field in self.model.structs.iter().flat_map(|s| &s.fields) {
            imports.extend(&field.resolved_imports);
        }
        if self.options.raw_values {
            let accessors = raw_value_types(self.model);
            for ty in &accessors {
                imports.extend(&ty.imports);
            }
            for target in raw_value_structs(self.model) {
                let raw = RawStruct::new(target, &accessors);
                for field in raw.passthrough_fields() {
                    imports.extend(&field.declared_imports);
                }
            }
        }
        imports
    }

    /// `prefix + S` taking one root-typed parameter per field.
    fn constructor(&self, model: &StructModel) -> Func {
        let fallible = self
            .model
            .constructor_returns_error(model, self.options.error_scope);

        let mut fields: Vec<FieldPlan<'_>> = model
            .fields
            .iter()
            .map(|field| FieldPlan {
                name: &field.name,
                param: GO_NAMING.local_name(&field.name),
                ty: &field.resolved,
                entry: self.model.registry.lookup(&model.name, &field.name),
            })
            .collect();

        // Parameters must not collide with each other, a temporary or the
        // struct type itself.
        let mut taken: Vec<String> = vec![model.name.clone()];
        taken.extend(fields.iter().filter(|f| f.entry.is_some()).map(|f| f.temp()));
        for field in &mut fields {
            while taken.contains(&field.param) {
                field.param.push('_');
            }
            taken.push(field.param.clone());
        }

        let mut body = Vec::new();
        for field in &fields {
            let Some(entry) = field.entry else {
                continue;
            };
            let call = format!("{}({})", entry.name, field.param);
            if entry.returns_error {
                body.push(CodeFragment::line(format!("{}, err := {}", field.temp(), call)));
                body.push(CodeFragment::block(
                    "if err != nil {",
                    vec![CodeFragment::line("return nil, err")],
                    "}",
                ));
            } else {
                body.push(CodeFragment::line(format!("{} := {}", field.temp(), call)));
            }
        }

        let literal = fields
            .iter()
            .fold(
                CompositeLit::new(format!("&{}", model.name)).prefix("return "),
                |lit, field| {
                    let value = match field.entry {
                        Some(_) => field.temp(),
                        None => field.param.clone(),
                    };
                    lit.elem(field.name, value)
                },
            )
            .suffix(if fallible { ", nil" } else { "" });
        body.extend(literal.to_fragments());

        let func = Func::new(format!("{}{}", self.options.prefix, model.name))
            .params(fields.iter().map(|f| Param::new(&f.param, f.ty)))
            .returns(format!("*{}", model.name));
        let func = if fallible { func.returns("error") } else { func };
        func.body(body)
    }
}

/// How one field is passed through the constructor.
struct FieldPlan<'a> {
    name: &'a str,
    param: String,
    ty: &'a str,
    entry: Option<&'a ConstructorEntry>,
}

impl FieldPlan<'_> {
    fn temp(&self) -> String {
        format!("{}{}", TEMP_PREFIX, to_pascal_case(self.name))
    }
}

impl GeneratedFile for ConstructorFile<'_> {
    fn path(&self) -> PathBuf {
        self.path.clone()
    }

    fn render(&self) -> String {
        let mut file = GoFile::new(&self.model.package)
            .imports(&self.imports())
            .add_all(self.model.structs.iter().map(|s| self.constructor(s)));
        if self.options.raw_values {
            let accessors = raw_value_types(self.model);
            file = file
                .add_all(
                    raw_value_structs(self.model)
                        .into_iter()
                        .map(|target| RawStruct::new(target, &accessors)),
                )
                .add_all(accessors.iter().copied().map(raw_value_accessor));
        }
        file.render()
    }
}
