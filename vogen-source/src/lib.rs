//! Go front end for vogen.
//!
//! Reads a single Go source file and produces a declaration-level AST:
//! the package clause, imports, type declarations and function signatures.
//! Errors carry the source text so they render with miette.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod ast;
mod error;
mod lexer;
mod parser;
mod token;

use std::path::Path;

pub use ast::{
    ChanDir, Decl, FieldDecl, FuncDecl, Ident, ImportName, ImportSpec, Param, Signature,
    SourceFile, TypeExpr, TypeSpec, assumed_package_name, is_predeclared,
};
pub use error::{Error, Result, SourceContext};
pub use lexer::tokenize;
pub use parser::parse;
pub use token::{Keyword, Punct, Span, Spanned, Token};

/// Read a Go file into a [`SourceContext`].
pub fn load(path: &Path) -> Result<SourceContext> {
    let src = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    Ok(SourceContext::new(src, path.display().to_string()))
}

/// Read and parse a Go file.
pub fn parse_file(path: &Path) -> Result<(SourceContext, SourceFile)> {
    let ctx = load(path)?;
    let file = parse(&ctx)?;
    Ok((ctx, file))
}
