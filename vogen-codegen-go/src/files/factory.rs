//! The `<base>_factory_gen.go` file: test data builders.

use std::path::PathBuf;

use vogen_codegen::CodeFragment;
use vogen_core::{GeneratedFile, to_pascal_case};
use vogen_model::{ImportSet, ResolutionModel, StructModel};

use crate::{Field, Func, GoFile, Param, StructType};

/// Factory file with a `<S>Setter` and `Build<S>` per target struct.
///
/// Unset fields are filled by `Build<S><F>(t)` helpers the user writes;
/// their existence is not checked.
pub struct FactoryFile<'a> {
    path: PathBuf,
    model: &'a ResolutionModel,
}

impl<'a> FactoryFile<'a> {
    pub fn new(path: impl Into<PathBuf>, model: &'a ResolutionModel) -> Self {
        Self {
            path: path.into(),
            model,
        }
    }

    fn imports(&self) -> ImportSet {
        let mut imports = ImportSet::new();
        imports.add_path("testing");
        for field in self.model.structs.iter().flat_map(|s| &s.fields) {
            imports.extend(&field.declared_imports);
        }
        imports
    }

    fn setter(model: &StructModel) -> StructType {
        StructType::new(setter_name(model)).fields(
            model
                .fields
                .iter()
                .map(|f| Field::new(&f.name, format!("*{}", f.declared))),
        )
    }

    fn builder(model: &StructModel) -> Func {
        let setter = setter_name(model);
        let mut body = vec![
            CodeFragment::line("t.Helper()"),
            CodeFragment::block(
                "if s == nil {",
                vec![CodeFragment::line(format!("s = &{}{{}}", setter))],
                "}",
            ),
            CodeFragment::line(format!("obj := &{}{{}}", model.name)),
        ];
        for field in &model.fields {
            let helper = format!(
                "Build{}{}",
                to_pascal_case(&model.name),
                to_pascal_case(&field.name)
            );
            body.push(CodeFragment::if_else(
                format!("s.{} == nil", field.name),
                vec![CodeFragment::line(format!("obj.{} = {}(t)", field.name, helper))],
                vec![CodeFragment::line(format!(
                    "obj.{} = *s.{}",
                    field.name, field.name
                ))],
            ));
        }
        body.push(CodeFragment::line("return obj"));

        Func::new(format!("Build{}", model.name))
            .param(Param::new("t", "*testing.T"))
            .param(Param::new("s", format!("*{}", setter)))
            .returns(format!("*{}", model.name))
            .body(body)
    }
}

fn setter_name(model: &StructModel) -> String {
    format!("{}Setter", model.name)
}

impl GeneratedFile for FactoryFile<'_> {
    fn path(&self) -> PathBuf {
        self.path.clone()
    }

    fn render(&self) -> String {
        let mut file = GoFile::new(&self.model.package).imports(&self.imports());
        for model in &self.model.structs {
            file = file.add(Self::setter(model)).add(Self::builder(model));
        }
        file.render()
    }
}
