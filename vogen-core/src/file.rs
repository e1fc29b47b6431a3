use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the path the file is written to
    fn path(&self) -> PathBuf;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk, leaving it untouched when the content is identical
    fn write(&self) -> Result<WriteResult> {
        write_if_changed(&self.path(), &self.render())
    }
}

/// Derive the output path for a generated file from the input unit.
///
/// The `.go` extension of `input` is replaced by `suffix`, so
/// `sample/address.go` with `_vo_gen.go` becomes `sample/address_vo_gen.go`.
pub fn output_path(input: &Path, suffix: &str) -> PathBuf {
    let file_name = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = file_name.strip_suffix(".go").unwrap_or(&file_name);
    input.with_file_name(format!("{}{}", stem, suffix))
}

fn write_if_changed(path: &Path, content: &str) -> Result<WriteResult> {
    if std::fs::read_to_string(path).is_ok_and(|existing| existing == content) {
        return Ok(WriteResult::Unchanged);
    }
    write_file(path, content)?;
    Ok(WriteResult::Written)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create '{}'", parent.display()))?;
    }
    std::fs::write(path, content).wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already had the same content
    Unchanged,
}
