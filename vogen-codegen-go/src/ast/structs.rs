//! Go struct type builder.

use vogen_codegen::{CodeBuilder, CodeFragment, Renderable, align_pairs};

/// A field in a Go struct.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub ty: String,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// Builder for `type Name struct { ... }` declarations.
///
/// Field types are column-aligned the way gofmt aligns them.
#[derive(Debug, Clone)]
pub struct StructType {
    name: String,
    fields: Vec<Field>,
}

impl StructType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn fields(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Build the struct as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::new();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for StructType {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.fields.is_empty() {
            return vec![CodeFragment::line(format!("type {} struct{{}}", self.name))];
        }
        let rows: Vec<(&str, &str)> = self
            .fields
            .iter()
            .map(|f| (f.name.as_str(), f.ty.as_str()))
            .collect();
        let body = align_pairs(&rows)
            .into_iter()
            .map(CodeFragment::Line)
            .collect();
        vec![CodeFragment::block(
            format!("type {} struct {{", self.name),
            body,
            "}",
        )]
    }
}
