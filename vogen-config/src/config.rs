use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;
use toml::Spanned;
use vogen_model::ErrorScope;

use crate::{Error, Result, SourceContext};

/// File picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "vogen.toml";
pub const DEFAULT_CONSTRUCTOR_SUFFIX: &str = "_vo_gen.go";
pub const DEFAULT_FACTORY_SUFFIX: &str = "_factory_gen.go";

/// Root of vogen.toml
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub generate: GenerateConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub format: FormatConfig,
}

/// `[generate]`: defaults for the matching command line flags.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerateConfig {
    pub prefix: Option<Spanned<String>>,
    pub factory: Option<bool>,
    pub raw_values: Option<bool>,
    pub error_scope: Option<ErrorScope>,
}

impl GenerateConfig {
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_ref().map(|p| p.get_ref().as_str())
    }
}

/// `[output]`: file name suffixes appended to the input's base name.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub constructor_suffix: Option<Spanned<String>>,
    pub factory_suffix: Option<Spanned<String>>,
}

impl OutputConfig {
    pub fn constructor_suffix(&self) -> &str {
        self.constructor_suffix
            .as_ref()
            .map_or(DEFAULT_CONSTRUCTOR_SUFFIX, |s| s.get_ref().as_str())
    }

    pub fn factory_suffix(&self) -> &str {
        self.factory_suffix
            .as_ref()
            .map_or(DEFAULT_FACTORY_SUFFIX, |s| s.get_ref().as_str())
    }
}

/// `[format]`: post-process output with gofmt/goimports.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormatConfig {
    #[serde(default)]
    pub enabled: bool,
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, DEFAULT_CONFIG_FILE)
    }
}

impl Config {
    /// Load the configuration for a run.
    ///
    /// An explicit path must exist. Without one, `vogen.toml` in the working
    /// directory is used when present, otherwise every setting is defaulted.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if path.is_file() {
                    Self::from_file(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Parse a vogen.toml file from the given path
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse a vogen.toml from a string with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let config: Self = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
        config.validate(&ctx)?;
        Ok(config)
    }

    fn validate(&self, ctx: &SourceContext) -> Result<()> {
        if let Some(prefix) = &self.generate.prefix
            && let Some(reason) = invalid_prefix(prefix.get_ref())
        {
            return Err(ctx.invalid_value_error("generate.prefix", reason, prefix.span()));
        }

        let suffixes = [
            ("output.constructor_suffix", &self.output.constructor_suffix),
            ("output.factory_suffix", &self.output.factory_suffix),
        ];
        for (key, suffix) in suffixes {
            if let Some(suffix) = suffix
                && let Some(reason) = invalid_suffix(suffix.get_ref())
            {
                return Err(ctx.invalid_value_error(key, reason, suffix.span()));
            }
        }

        if self.output.constructor_suffix() == self.output.factory_suffix() {
            let span = self
                .output
                .factory_suffix
                .as_ref()
                .or(self.output.constructor_suffix.as_ref())
                .map(|s| s.span())
                .unwrap_or_default();
            return Err(ctx.invalid_value_error(
                "output.factory_suffix",
                "constructor and factory output would be written to the same file",
                span,
            ));
        }

        Ok(())
    }
}

/// Why `prefix` cannot start a Go identifier, if it cannot.
pub fn invalid_prefix(prefix: &str) -> Option<&'static str> {
    if prefix.starts_with(|c: char| c.is_ascii_digit()) {
        return Some("a Go identifier cannot start with a digit");
    }
    if !prefix.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return Some("use only letters, digits and underscores");
    }
    None
}

fn invalid_suffix(suffix: &str) -> Option<&'static str> {
    if !suffix.ends_with(".go") {
        return Some("suffix must end in '.go'");
    }
    if suffix.contains(['/', '\\']) {
        return Some("suffix must not contain a path separator");
    }
    None
}
