//! Report data structures for the generate run.
//!
//! Data collection is separated from rendering: the operations build
//! reports, then the command renders them to an [`Output`] target.

mod generate;
mod model;
mod output;

pub use generate::{
    GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenFile, WrittenResult,
};
pub use model::ModelReport;
#[cfg(test)]
pub use output::RecordingOutput;
pub use output::{Output, Report, TerminalOutput};

/// Analysis diagnostics, split by severity.
#[derive(Debug, Default)]
pub struct Diagnostics {
    pub warnings: Vec<String>,
    pub infos: Vec<String>,
}

impl Report for Diagnostics {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }
        for info in &self.infos {
            out.info(info);
        }
    }
}
