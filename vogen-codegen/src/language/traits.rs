//! Language-agnostic code generation traits.

use std::path::PathBuf;

use eyre::Result;
use vogen_core::WriteResult;

/// Trait for target-language generators.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "go")
    fn language(&self) -> &'static str;

    /// Render every output file without writing to disk
    fn preview(&self) -> Vec<PreviewFile>;

    /// Render and write every output file
    fn generate(&self) -> Result<GenerateResult>;
}

/// A rendered file for preview
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewFile {
    pub path: PathBuf,
    pub content: String,
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Every output path with what happened to it, in generation order
    pub files: Vec<(PathBuf, WriteResult)>,
}

impl GenerateResult {
    /// Paths whose content changed on disk.
    pub fn written(&self) -> impl Iterator<Item = &PathBuf> {
        self.files
            .iter()
            .filter(|(_, result)| *result == WriteResult::Written)
            .map(|(path, _)| path)
    }

    /// Paths that already had the generated content.
    pub fn unchanged(&self) -> impl Iterator<Item = &PathBuf> {
        self.files
            .iter()
            .filter(|(_, result)| *result == WriteResult::Unchanged)
            .map(|(path, _)| path)
    }
}
