//! Analysis pipeline.
//!
//! This module provides a [`Pipeline`] orchestrator that turns a parsed Go
//! file into a [`ResolutionModel`](vogen_model::ResolutionModel). The
//! pipeline provides:
//!
//! - Explicit phase boundaries (catalog → structs → registry)
//! - Unified diagnostics collection
//! - Shared state via [`CompilationContext`]
//!
//! # Example
//!
//! ```ignore
//! use vogen_codegen::{GenerateOptions, pipeline::Pipeline};
//!
//! let (source, file) = vogen_source::parse_file(path)?;
//! let options = GenerateOptions::new("New", ["Person"]);
//! let ctx = Pipeline::new().run(source, file, options)?;
//!
//! for diag in ctx.warnings() {
//!     eprintln!("{diag}");
//! }
//!
//! let model = ctx.into_model()?;
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod runner;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use runner::Pipeline;
