//! Pipeline phase trait.

use vogen_source::Result;

use super::CompilationContext;

/// A phase in the analysis pipeline.
///
/// Phases are executed in order by the pipeline. Each phase reads the parsed
/// file and the models built before it, and fills in its own slot of the
/// context.
///
/// Built-in phases:
/// - `CatalogPhase` - resolves declared types to their roots
/// - `StructPhase` - builds models for the requested structs
/// - `RegistryPhase` - collects hand-written constructors
pub trait Phase: Send + Sync {
    /// The name of this phase (used in diagnostics).
    fn name(&self) -> &'static str;

    /// A human-readable description of what this phase does.
    fn description(&self) -> &'static str;

    /// Run this phase on the compilation context.
    ///
    /// # Errors
    ///
    /// Returns an error if the phase fails fatally. Non-fatal issues should
    /// be recorded as diagnostics instead.
    fn run(&self, ctx: &mut CompilationContext) -> Result<()>;
}
