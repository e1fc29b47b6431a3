//! Generate report data structures.

use std::path::PathBuf;

use super::{
    Diagnostics,
    output::{Output, Report},
};

/// Report data from one generator run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Go package of the input file.
    pub package: String,

    /// Structs constructors were generated for, in declaration order.
    pub structs: Vec<String>,

    /// Diagnostics collected by the pipeline.
    pub diagnostics: Diagnostics,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    pub files: Vec<WrittenFile>,
    /// Formatters that ran over the output, empty when formatting was off.
    pub formatters: Vec<&'static str>,
}

#[derive(Debug)]
pub struct WrittenFile {
    pub path: PathBuf,
    /// False when the file already had identical content.
    pub changed: bool,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        self.diagnostics.render(out);
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.key_value(
            &format!("package {}", self.package),
            &self.structs.join(", "),
        );
        out.newline();

        out.section("Generated");
        for file in &written.files {
            let path = file.path.display().to_string();
            if file.changed {
                out.added_item(&path);
            } else {
                out.unchanged_item(&path);
            }
        }

        if !written.formatters.is_empty() {
            out.newline();
            out.key_value("Formatted with", &written.formatters.join(", "));
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!(
            "{} file{} would be generated",
            preview.files.len(),
            if preview.files.len() == 1 { "" } else { "s" }
        ));
    }
}
