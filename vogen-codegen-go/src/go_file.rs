//! GoFile abstraction for structured Go file generation.
//!
//! Provides a high-level API for generating Go files with a generated-code
//! header, package clause, import block and declarations.

use vogen_codegen::{CodeBuilder, CodeFragment, Renderable};
use vogen_core::GENERATED_HEADER;
use vogen_model::{Import, ImportSet};

fn import_spec(import: &Import) -> String {
    match &import.alias {
        Some(alias) => format!("{} \"{}\"", alias, import.path),
        None => format!("\"{}\"", import.path),
    }
}

/// Render an import declaration.
///
/// A single import uses the one-line form; several are grouped and sorted
/// by path. An empty set renders nothing.
pub fn render_imports(imports: &ImportSet) -> Vec<CodeFragment> {
    let sorted = imports.sorted();
    match sorted.as_slice() {
        [] => Vec::new(),
        [single] => vec![CodeFragment::line(format!("import {}", import_spec(single)))],
        many => vec![CodeFragment::block(
            "import (",
            many.iter()
                .map(|import| CodeFragment::line(import_spec(import)))
                .collect(),
            ")",
        )],
    }
}

/// A structured representation of a generated Go file.
///
/// # Example
///
/// ```ignore
/// let content = GoFile::new("sample")
///     .import(&Import::new("time"))
///     .add(constructor)
///     .render();
/// ```
#[derive(Debug, Default)]
pub struct GoFile {
    package: String,
    imports: ImportSet,
    body: Vec<Vec<CodeFragment>>,
}

impl GoFile {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            ..Self::default()
        }
    }

    pub fn import(mut self, import: &Import) -> Self {
        self.imports.add(import);
        self
    }

    pub fn imports(mut self, imports: &ImportSet) -> Self {
        self.imports.merge(imports);
        self
    }

    /// Add a declaration (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Add multiple declarations.
    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        for node in nodes {
            self.body.push(node.to_fragments());
        }
        self
    }

    /// Render the file, starting with the generated-code header.
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::new();

        builder
            .push_line(GENERATED_HEADER)
            .push_blank()
            .push_line(&format!("package {}", self.package));

        let imports = render_imports(&self.imports);
        if !imports.is_empty() {
            builder.push_blank();
            for fragment in &imports {
                builder.apply_fragment(fragment);
            }
        }

        for fragments in &self.body {
            builder.push_blank();
            for fragment in fragments {
                builder.apply_fragment(fragment);
            }
        }

        builder.build()
    }
}
