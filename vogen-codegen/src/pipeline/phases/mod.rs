//! Built-in pipeline phases.
//!
//! This module provides the standard phases that run in every pipeline:
//!
//! - [`CatalogPhase`] - resolves every declared type to its root
//! - [`StructPhase`] - builds models for the requested structs
//! - [`RegistryPhase`] - collects hand-written constructors

mod catalog;
mod imports;
mod registry;
mod structs;

pub use catalog::CatalogPhase;
pub use registry::RegistryPhase;
pub use structs::StructPhase;
