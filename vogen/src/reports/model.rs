//! `--dump-model` report.

use super::{
    Diagnostics,
    output::{Output, Report},
};

/// The resolution model serialized as JSON.
#[derive(Debug)]
pub struct ModelReport {
    pub diagnostics: Diagnostics,
    pub json: String,
}

impl Report for ModelReport {
    fn render(&self, out: &mut dyn Output) {
        self.diagnostics.render(out);
        out.preformatted(&self.json);
    }
}
