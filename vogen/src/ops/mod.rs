//! Core operations.
//!
//! This module contains the business logic behind the `vogen` command,
//! separated from argument parsing and output rendering.

pub mod generate;

pub use generate::{Analysis, GenerateRun, analyze, dump_model, generate};
