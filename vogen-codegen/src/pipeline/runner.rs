//! Pipeline orchestrator.

use vogen_source::{Result, SourceContext, SourceFile};

use super::{
    CompilationContext, Phase,
    phases::{CatalogPhase, RegistryPhase, StructPhase},
};
use crate::GenerateOptions;

/// The analysis pipeline orchestrator.
///
/// Runs the built-in phases (catalog, structs, registry) followed by any
/// extra phases, stopping at the first fatal error.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new().phase(MyCustomPhase);
/// let ctx = pipeline.run(source, file, options)?;
/// ```
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
}

impl Pipeline {
    /// Create a new pipeline with default built-in phases.
    pub fn new() -> Self {
        Self { phases: Vec::new() }
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Run the pipeline on a parsed file.
    ///
    /// Executes all phases in order:
    /// 1. CatalogPhase - resolves declared types
    /// 2. StructPhase - builds the requested struct models
    /// 3. RegistryPhase - collects hand-written constructors
    /// 4. Extra phases (if any)
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails fatally.
    pub fn run(
        &self,
        source: SourceContext,
        file: SourceFile,
        options: GenerateOptions,
    ) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(source, file, options);

        let builtin_phases: Vec<Box<dyn Phase>> = vec![
            Box::new(CatalogPhase),
            Box::new(StructPhase),
            Box::new(RegistryPhase),
        ];

        for phase in builtin_phases.iter().chain(self.phases.iter()) {
            phase.run(&mut ctx)?;
        }

        Ok(ctx)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
