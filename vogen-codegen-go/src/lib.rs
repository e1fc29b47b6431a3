//! Go code generation for vogen.
//!
//! Renders a [`vogen_model::ResolutionModel`] into Go source: one file with
//! the struct constructors (and optional `RawValue()` accessors), and an
//! optional test factory file.

mod format;
mod generator;
mod go_file;
mod naming;

pub mod ast;
pub mod files;

pub use ast::{CompositeLit, Field, Func, Param, StructType};
pub use format::{FormatReport, GoFormatter};
pub use generator::{Generator, OutputNames};
pub use go_file::{GoFile, render_imports};
pub use naming::GO_NAMING;
pub use vogen_codegen::{GenerateResult, LanguageCodegen, PreviewFile};
