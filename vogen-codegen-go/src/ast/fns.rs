//! Go function builder.

use std::fmt;

use vogen_codegen::{CodeBuilder, CodeFragment, Renderable};

/// A parameter or receiver of a Go function.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.ty)
    }
}

/// Builder for Go functions and methods.
#[derive(Debug, Clone)]
pub struct Func {
    name: String,
    receiver: Option<Param>,
    params: Vec<Param>,
    results: Vec<String>,
    body: Vec<CodeFragment>,
}

impl Func {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            receiver: None,
            params: Vec::new(),
            results: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Make this a method on `receiver`.
    pub fn receiver(mut self, receiver: Param) -> Self {
        self.receiver = Some(receiver);
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn params(mut self, params: impl IntoIterator<Item = Param>) -> Self {
        self.params.extend(params);
        self
    }

    /// Add a result type. Two or more results render parenthesised.
    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.results.push(ty.into());
        self
    }

    /// Add a line to the function body.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(CodeFragment::Line(line.into()));
        self
    }

    /// Add pre-built fragments to the function body.
    pub fn body(mut self, fragments: impl IntoIterator<Item = CodeFragment>) -> Self {
        self.body.extend(fragments);
        self
    }

    fn signature(&self) -> String {
        let receiver = self
            .receiver
            .as_ref()
            .map(|r| format!("({}) ", r))
            .unwrap_or_default();
        let params = self
            .params
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let results = match self.results.as_slice() {
            [] => String::new(),
            [single] => format!(" {}", single),
            many => format!(" ({})", many.join(", ")),
        };
        format!("func {}{}({}){}", receiver, self.name, params, results)
    }

    /// Build the function as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::new();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Func {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::block(
            format!("{} {{", self.signature()),
            self.body.clone(),
            "}",
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_func() {
        let f = Func::new("run").build();
        assert_eq!(f, "func run() {\n}\n");
    }

    #[test]
    fn test_func_with_params_and_result() {
        let f = Func::new("NewPerson")
            .param(Param::new("name", "string"))
            .param(Param::new("age", "int"))
            .returns("*Person")
            .body_line("return &Person{}")
            .build();
        assert_eq!(
            f,
            "func NewPerson(name string, age int) *Person {\n\treturn &Person{}\n}\n"
        );
    }

    #[test]
    fn test_multiple_results() {
        let f = Func::new("NewAddress")
            .returns("*Address")
            .returns("error")
            .build();
        assert!(f.starts_with("func NewAddress() (*Address, error) {"));
    }

    #[test]
    fn test_method() {
        let f = Func::new("RawValue")
            .receiver(Param::new("d", "AddressCity"))
            .returns("string")
            .body_line("return string(d)")
            .build();
        assert_eq!(
            f,
            "func (d AddressCity) RawValue() string {\n\treturn string(d)\n}\n"
        );
    }
}
