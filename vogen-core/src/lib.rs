//! Core utilities and types for the vogen generator.
//!
//! This crate provides the naming helpers and file output primitives
//! shared by every other vogen crate.

mod file;
mod utils;

// File operations
pub use file::{GeneratedFile, WriteResult, output_path};
// String utilities
pub use utils::{to_camel_case, to_pascal_case};

/// First line of every file vogen writes.
///
/// Matches the `^// Code generated .* DO NOT EDIT\.$` convention so Go
/// tooling recognises the output as generated.
pub const GENERATED_HEADER: &str = "// Code generated by vogen. DO NOT EDIT.";
