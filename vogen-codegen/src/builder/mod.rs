//! Code generation building blocks.
//!
//! - [`CodeBuilder`] - Tab-indented text buffer
//! - [`CodeFragment`] - Intermediate representation for code pieces
//! - [`Renderable`] - Trait for types that can be converted to code fragments
//! - [`align_pairs`] - gofmt-style column alignment

mod align;
mod code_builder;
mod renderable;

pub use align::align_pairs;
pub use code_builder::CodeBuilder;
pub use renderable::{CodeFragment, Renderable};
