//! Keyed composite literals.

use vogen_codegen::{CodeBuilder, CodeFragment, Renderable, align_pairs};

/// A keyed composite literal such as `&Person{Name: name}`, rendered one
/// element per line with gofmt value alignment.
///
/// `prefix` and `suffix` wrap the literal into a statement, e.g.
/// `return ` and `, nil`.
#[derive(Debug, Clone)]
pub struct CompositeLit {
    ty: String,
    elems: Vec<(String, String)>,
    prefix: String,
    suffix: String,
}

impl CompositeLit {
    /// Literal of type `ty`, including any leading `&`.
    pub fn new(ty: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            elems: Vec::new(),
            prefix: String::new(),
            suffix: String::new(),
        }
    }

    pub fn elem(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.elems.push((key.into(), value.into()));
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Build the literal as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::new();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for CompositeLit {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.elems.is_empty() {
            return vec![CodeFragment::line(format!(
                "{}{}{{}}{}",
                self.prefix, self.ty, self.suffix
            ))];
        }
        let rows: Vec<(String, String)> = self
            .elems
            .iter()
            .map(|(key, value)| (format!("{}:", key), format!("{},", value)))
            .collect();
        let body = align_pairs(&rows)
            .into_iter()
            .map(CodeFragment::Line)
            .collect();
        vec![CodeFragment::block(
            format!("{}{}{{", self.prefix, self.ty),
            body,
            &format!("}}{}", self.suffix),
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_literal() {
        let lit = CompositeLit::new("&Empty").prefix("return ").build();
        assert_eq!(lit, "return &Empty{}\n");
    }

    #[test]
    fn test_keyed_literal_aligned() {
        let lit = CompositeLit::new("&Address")
            .elem("Number", "vogenNumber")
            .elem("Country", "country")
            .prefix("return ")
            .suffix(", nil")
            .build();
        assert_eq!(
            lit,
            "return &Address{\n\tNumber:  vogenNumber,\n\tCountry: country,\n}, nil\n"
        );
    }
}
