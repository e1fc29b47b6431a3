//! Generated Go files.

mod constructor;
mod factory;
mod raw_value;

pub use constructor::ConstructorFile;
pub use factory::FactoryFile;
pub use raw_value::{raw_value_accessor, raw_value_types};
