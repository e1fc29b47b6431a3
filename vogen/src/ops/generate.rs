//! Generate operation - analysis and code generation for one Go file.

use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use vogen_codegen::{
    GenerateOptions, LanguageCodegen,
    pipeline::{Pipeline, Severity},
};
use vogen_codegen_go::{Generator, GoFormatter, OutputNames};
use vogen_core::WriteResult;
use vogen_model::ResolutionModel;

use crate::reports::{
    Diagnostics, GenerateReport, GenerationResult, ModelReport, PreviewFile, PreviewResult,
    WrittenFile, WrittenResult,
};

/// Resolution model of a file plus what the pipeline had to say about it.
#[derive(Debug)]
pub struct Analysis {
    pub model: ResolutionModel,
    pub diagnostics: Diagnostics,
}

/// Options for the generate operation.
pub struct GenerateRun<'a> {
    /// The Go file that was analyzed; output lands next to it.
    pub input: &'a Path,
    pub options: &'a GenerateOptions,
    pub names: OutputNames,
    /// Preview generated code without writing to disk.
    pub dry_run: bool,
    /// Run gofmt/goimports over the written files.
    pub format: bool,
}

/// Parse `path` and run the analysis pipeline over it.
///
/// Errors are source errors so the caller can render them with miette.
pub fn analyze(path: &Path, options: &GenerateOptions) -> vogen_source::Result<Analysis> {
    let (source, file) = vogen_source::parse_file(path)?;
    let ctx = Pipeline::new().run(source, file, options.clone())?;

    let mut diagnostics = Diagnostics::default();
    for diag in &ctx.diagnostics {
        let message = match &diag.location {
            Some(location) => format!("{} (at {})", diag.message, location),
            None => diag.message.clone(),
        };
        match diag.severity {
            Severity::Warning => diagnostics.warnings.push(message),
            Severity::Info => diagnostics.infos.push(message),
        }
    }

    Ok(Analysis {
        model: ctx.into_model()?,
        diagnostics,
    })
}

/// Serialize the resolution model for `--dump-model`.
pub fn dump_model(analysis: Analysis) -> Result<ModelReport> {
    let json = serde_json::to_string_pretty(&analysis.model)
        .wrap_err("Failed to serialize resolution model")?;
    Ok(ModelReport {
        diagnostics: analysis.diagnostics,
        json,
    })
}

/// Execute the generate operation.
///
/// Renders the constructor file, and the factory file when enabled, then
/// either writes them next to the input or returns them as a preview.
pub fn generate(analysis: Analysis, run: GenerateRun<'_>) -> Result<GenerateReport> {
    let generator = Generator::new(&analysis.model, run.options, run.input).with_names(run.names);

    let result = if run.dry_run {
        let files = generator
            .preview()
            .into_iter()
            .map(|file| PreviewFile {
                path: file.path.display().to_string(),
                content: file.content,
            })
            .collect();
        GenerationResult::Preview(PreviewResult { files })
    } else {
        let generated = generator
            .generate()
            .wrap_err("Failed to generate code")?;

        let mut formatters = Vec::new();
        if run.format {
            let paths: Vec<PathBuf> = generated.files.iter().map(|(p, _)| p.clone()).collect();
            let report = GoFormatter::new()
                .format(&paths)
                .wrap_err("Failed to format generated code")?;
            formatters.push("gofmt");
            if report.goimports {
                formatters.push("goimports");
            }
        }

        let files = generated
            .files
            .into_iter()
            .map(|(path, status)| WrittenFile {
                path,
                changed: status == WriteResult::Written,
            })
            .collect();
        GenerationResult::Written(WrittenResult { files, formatters })
    };

    Ok(GenerateReport {
        package: analysis.model.package.clone(),
        structs: analysis
            .model
            .structs
            .iter()
            .map(|s| s.name.clone())
            .collect(),
        diagnostics: analysis.diagnostics,
        result,
    })
}
