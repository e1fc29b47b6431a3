//! Tab-indented text buffer that generated Go files are printed into.

use super::{CodeFragment, Renderable};

/// gofmt indents with one tab per level.
const INDENT: char = '\t';

/// Accumulates lines at the current indentation level.
///
/// # Example
///
/// ```
/// use vogen_codegen::builder::{CodeBuilder, CodeFragment};
///
/// let mut builder = CodeBuilder::new();
/// builder.push_line("package main").push_blank();
/// builder.apply_fragment(&CodeFragment::block(
///     "func main() {",
///     vec![CodeFragment::line("println(\"hi\")")],
///     "}",
/// ));
///
/// assert_eq!(builder.build(), "package main\n\nfunc main() {\n\tprintln(\"hi\")\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    depth: usize,
    buffer: String,
}

impl CodeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.buffer.extend(std::iter::repeat_n(INDENT, self.depth));
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// An empty line, never indented.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.depth += 1;
        self
    }

    pub fn push_dedent(&mut self) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self
    }

    /// Print every fragment of `node`.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(&fragment);
        }
        self
    }

    pub fn apply_fragment(&mut self, fragment: &CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_arm(header, body);
                self.push_line(close);
            }
            CodeFragment::Arms { arms, close } => {
                for (header, body) in arms {
                    self.push_arm(header, body);
                }
                self.push_line(close);
            }
        }
    }

    fn push_arm(&mut self, header: &str, body: &[CodeFragment]) {
        self.push_line(header).push_indent();
        for fragment in body {
            self.apply_fragment(fragment);
        }
        self.push_dedent();
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }
}
