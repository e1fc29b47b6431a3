//! Fragments of generated code, decoupled from the builder that prints them.

/// A piece of brace-delimited source code.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line (a newline is appended).
    Line(String),
    /// An empty line.
    Blank,
    /// `header`, the body one level deeper, then `close`.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: String,
    },
    /// Consecutive blocks sharing their braces, as in `if` / `} else {` / `}`.
    Arms {
        arms: Vec<(String, Vec<CodeFragment>)>,
        close: String,
    },
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn blank() -> Self {
        Self::Blank
    }

    pub fn block(header: impl Into<String>, body: Vec<CodeFragment>, close: &str) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close: close.to_string(),
        }
    }

    /// `if cond { then } else { otherwise }` laid out over several lines.
    pub fn if_else(
        cond: impl AsRef<str>,
        then: Vec<CodeFragment>,
        otherwise: Vec<CodeFragment>,
    ) -> Self {
        Self::Arms {
            arms: vec![
                (format!("if {} {{", cond.as_ref()), then),
                ("} else {".to_string(), otherwise),
            ],
            close: "}".to_string(),
        }
    }
}

/// Types that lower themselves to code fragments.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_if_else_arms() {
        let fragment = CodeFragment::if_else(
            "s.Name == nil",
            vec![CodeFragment::line("obj.Name = BuildPersonName(t)")],
            vec![CodeFragment::line("obj.Name = *s.Name")],
        );
        let CodeFragment::Arms { arms, close } = fragment else {
            panic!("Expected Arms variant");
        };
        assert_eq!(arms[0].0, "if s.Name == nil {");
        assert_eq!(arms[1].0, "} else {");
        assert_eq!(close, "}");
    }
}
