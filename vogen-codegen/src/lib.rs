//! Analysis pipeline and code building blocks for vogen.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, column alignment)
//! - [`pipeline`] - Phases that turn a parsed Go file into a [`vogen_model::ResolutionModel`]
//! - [`language`] - The trait a target-language generator implements

pub mod builder;
pub mod language;
pub mod pipeline;

mod options;

pub use builder::{CodeBuilder, CodeFragment, Renderable, align_pairs};
pub use language::{GenerateResult, LanguageCodegen, NamingConvention, PreviewFile};
pub use options::GenerateOptions;
