//! Go declaration builders.
//!
//! Each builder implements [`Renderable`](vogen_codegen::Renderable) so it
//! can be added to a [`GoFile`](crate::GoFile).

mod fns;
mod literals;
mod structs;

pub use fns::{Func, Param};
pub use literals::CompositeLit;
pub use structs::{Field, StructType};
