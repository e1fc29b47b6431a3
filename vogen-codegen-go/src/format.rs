//! Post-processing generated files with the Go toolchain formatters.

use std::{io::ErrorKind, path::PathBuf, process::Command};

use eyre::{Result, bail};

/// What the formatter did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatReport {
    /// `goimports` was found and ran.
    pub goimports: bool,
}

/// Runs `gofmt -w` and then `goimports -w` when it is installed.
///
/// Generated files are already gofmt-clean, so this only matters when the
/// user's toolchain formats differently.
#[derive(Debug, Clone)]
pub struct GoFormatter {
    gofmt: String,
    goimports: String,
}

impl Default for GoFormatter {
    fn default() -> Self {
        Self {
            gofmt: "gofmt".to_string(),
            goimports: "goimports".to_string(),
        }
    }
}

impl GoFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use different executables, e.g. absolute paths.
    pub fn with_tools(gofmt: impl Into<String>, goimports: impl Into<String>) -> Self {
        Self {
            gofmt: gofmt.into(),
            goimports: goimports.into(),
        }
    }

    /// Format `paths` in place.
    ///
    /// # Errors
    ///
    /// Fails when `gofmt` is missing or either tool exits unsuccessfully.
    pub fn format(&self, paths: &[PathBuf]) -> Result<FormatReport> {
        if paths.is_empty() {
            return Ok(FormatReport { goimports: false });
        }

        match run(&self.gofmt, paths) {
            Ok(()) => {}
            Err(ToolError::NotFound) => {
                bail!("'{}' was not found; install Go or drop --format", self.gofmt)
            }
            Err(ToolError::Failed(report)) => return Err(report),
        }

        let goimports = match run(&self.goimports, paths) {
            Ok(()) => true,
            Err(ToolError::NotFound) => false,
            Err(ToolError::Failed(report)) => return Err(report),
        };

        Ok(FormatReport { goimports })
    }
}

enum ToolError {
    NotFound,
    Failed(eyre::Report),
}

fn run(tool: &str, paths: &[PathBuf]) -> std::result::Result<(), ToolError> {
    let output = match Command::new(tool).arg("-w").args(paths).output() {
        Ok(output) => output,
        Err(e) if e.kind() == ErrorKind::NotFound => return Err(ToolError::NotFound),
        Err(e) => {
            return Err(ToolError::Failed(
                eyre::Report::new(e).wrap_err(format!("failed to run '{}'", tool)),
            ));
        }
    };
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ToolError::Failed(eyre::eyre!(
            "'{}' exited with {}: {}",
            tool,
            output.status,
            stderr.trim()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MISSING: &str = "vogen-test-tool-that-does-not-exist";

    #[test]
    fn test_no_paths_is_noop() {
        let report = GoFormatter::with_tools(MISSING, MISSING).format(&[]).unwrap();
        assert!(!report.goimports);
    }

    #[test]
    fn test_missing_gofmt_is_an_error() {
        let err = GoFormatter::with_tools(MISSING, MISSING)
            .format(&[PathBuf::from("x.go")])
            .unwrap_err();
        assert!(err.to_string().contains("was not found"));
    }
}
