//! Compilation context passed through pipeline phases.

use vogen_model::{ConstructorRegistry, ResolutionModel, StructModel, TypeCatalog};
use vogen_source::{Error, Result, SourceContext, SourceFile};

use super::diagnostic::{Diagnostic, Severity};
use crate::GenerateOptions;

/// Context passed through all pipeline phases.
///
/// This struct carries the state of analysis through each phase,
/// accumulating models and diagnostics along the way.
#[derive(Debug)]
pub struct CompilationContext {
    /// The Go file being analysed, kept for error reporting.
    pub source: SourceContext,
    pub file: SourceFile,
    pub options: GenerateOptions,
    /// Declared types (populated by CatalogPhase).
    pub catalog: Option<TypeCatalog>,
    /// Requested struct models (populated by StructPhase).
    pub structs: Option<Vec<StructModel>>,
    /// Hand-written constructors (populated by RegistryPhase).
    pub registry: Option<ConstructorRegistry>,
    /// Types with a hand-written `RawValue` method (populated by RegistryPhase).
    pub raw_value_receivers: Vec<String>,
    /// Diagnostics collected during analysis.
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    pub fn new(source: SourceContext, file: SourceFile, options: GenerateOptions) -> Self {
        Self {
            source,
            file,
            options,
            catalog: None,
            structs: None,
            registry: None,
            raw_value_receivers: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.add_diagnostic(Diagnostic::warning(phase, message));
    }

    pub fn add_info(&mut self, phase: &str, message: impl Into<String>) {
        self.add_diagnostic(Diagnostic::info(phase, message));
    }

    /// Record a diagnostic unless an identical one is already present.
    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        if !self.diagnostics.contains(&diagnostic) {
            self.diagnostics.push(diagnostic);
        }
    }

    /// Warn about package qualifiers that match no import.
    pub fn warn_unresolved(&mut self, phase: &str, qualifiers: &[String]) {
        for qualifier in qualifiers {
            self.add_warning(
                phase,
                format!(
                    "package qualifier '{}' matches no import in '{}'; no import will be generated for it",
                    qualifier,
                    self.source.filename()
                ),
            );
        }
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }

    /// The type catalog, or a phase-order error naming `phase`.
    pub fn require_catalog(&self, phase: &'static str) -> Result<&TypeCatalog> {
        self.catalog
            .as_ref()
            .ok_or_else(|| Error::phase_order(phase, "the type catalog"))
    }

    /// Consume the context and assemble the resolution model.
    ///
    /// # Errors
    ///
    /// Returns a phase-order error if a built-in phase did not run.
    pub fn into_model(self) -> Result<ResolutionModel> {
        let catalog = self
            .catalog
            .ok_or_else(|| Error::phase_order("model", "the type catalog"))?;
        let structs = self
            .structs
            .ok_or_else(|| Error::phase_order("model", "struct models"))?;
        let registry = self
            .registry
            .ok_or_else(|| Error::phase_order("model", "the constructor registry"))?;
        Ok(ResolutionModel {
            package: self.file.package.name,
            catalog,
            structs,
            registry,
            raw_value_receivers: self.raw_value_receivers,
        })
    }
}
