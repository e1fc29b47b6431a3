use std::path::{Path, PathBuf};

use eyre::Result;
use vogen_codegen::{GenerateOptions, GenerateResult, LanguageCodegen, PreviewFile};
use vogen_core::{GeneratedFile, output_path};
use vogen_model::ResolutionModel;

use crate::files::{ConstructorFile, FactoryFile};

/// File name suffixes for generated output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputNames {
    pub constructor_suffix: String,
    pub factory_suffix: String,
}

impl Default for OutputNames {
    fn default() -> Self {
        Self {
            constructor_suffix: "_vo_gen.go".to_string(),
            factory_suffix: "_factory_gen.go".to_string(),
        }
    }
}

/// Go code generator that renders constructors and factories next to the
/// input file.
pub struct Generator<'a> {
    model: &'a ResolutionModel,
    options: &'a GenerateOptions,
    input: PathBuf,
    names: OutputNames,
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "go"
    }

    fn preview(&self) -> Vec<PreviewFile> {
        self.files()
            .iter()
            .map(|file| PreviewFile {
                path: file.path(),
                content: file.render(),
            })
            .collect()
    }

    fn generate(&self) -> Result<GenerateResult> {
        let mut result = GenerateResult::default();
        for file in self.files() {
            let status = file.write()?;
            result.files.push((file.path(), status));
        }
        Ok(result)
    }
}

impl<'a> Generator<'a> {
    pub fn new(model: &'a ResolutionModel, options: &'a GenerateOptions, input: &Path) -> Self {
        Self {
            model,
            options,
            input: input.to_path_buf(),
            names: OutputNames::default(),
        }
    }

    pub fn with_names(mut self, names: OutputNames) -> Self {
        self.names = names;
        self
    }

    pub fn constructor_path(&self) -> PathBuf {
        output_path(&self.input, &self.names.constructor_suffix)
    }

    pub fn factory_path(&self) -> PathBuf {
        output_path(&self.input, &self.names.factory_suffix)
    }

    /// Every file this run produces, constructor file first.
    fn files(&self) -> Vec<Box<dyn GeneratedFile + '_>> {
        let mut files: Vec<Box<dyn GeneratedFile + '_>> = vec![Box::new(ConstructorFile::new(
            self.constructor_path(),
            self.model,
            self.options,
        ))];
        if self.options.factory {
            files.push(Box::new(FactoryFile::new(self.factory_path(), self.model)));
        }
        files
    }
}
