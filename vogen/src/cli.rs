use std::path::PathBuf;

use clap::{CommandFactory, Parser, error::ErrorKind};
use eyre::Result;
use vogen_codegen::GenerateOptions;
use vogen_codegen_go::OutputNames;
use vogen_config::Config;
use vogen_model::ErrorScope;

use crate::{
    ops::{self, GenerateRun},
    reports::{Report, TerminalOutput},
};

/// Extension trait for exiting on source and config errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for vogen_source::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

impl<T> UnwrapOrExit<T> for vogen_config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "vogen")]
#[command(version)]
#[command(about = "Generate constructors for Go structs built from value objects")]
pub(crate) struct Cli {
    /// Go file declaring the structs
    #[arg(long)]
    pub path: PathBuf,

    /// Structs to generate constructors for, comma separated
    #[arg(long, required = true, value_delimiter = ',')]
    pub structs: Vec<String>,

    /// Prefix of the hand-written field constructors (overrides vogen.toml)
    #[arg(long, value_parser = parse_prefix)]
    pub prefix: Option<String>,

    /// Also generate test factories
    #[arg(long)]
    pub factory: bool,

    /// Path to vogen.toml (defaults to ./vogen.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Generate RawValue() accessors for field types
    #[arg(long)]
    pub raw_values: bool,

    /// Which constructors return an error: global or per-struct
    #[arg(long)]
    pub error_scope: Option<ErrorScope>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Run gofmt and goimports over the generated files
    #[arg(long)]
    pub format: bool,

    /// Print the resolution model as JSON instead of generating code
    #[arg(long, conflicts_with_all = ["dry_run", "format"])]
    pub dump_model: bool,
}

/// Flags merged with vogen.toml.
#[derive(Debug)]
pub(crate) struct Settings {
    pub options: GenerateOptions,
    pub names: OutputNames,
    pub format: bool,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        let config = Config::load(self.config.as_deref()).unwrap_or_exit();
        let settings = self.settings(&config).unwrap_or_else(|e| e.exit());

        let analysis = ops::analyze(&self.path, &settings.options).unwrap_or_exit();

        if self.dump_model {
            let report = ops::dump_model(analysis)?;
            report.render(&mut TerminalOutput::new());
            return Ok(());
        }

        let report = ops::generate(
            analysis,
            GenerateRun {
                input: &self.path,
                options: &settings.options,
                names: settings.names,
                dry_run: self.dry_run,
                format: settings.format,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }

    /// Merge the flags with `config`. Flags win; switches are on when
    /// either side enables them.
    fn settings(&self, config: &Config) -> std::result::Result<Settings, clap::Error> {
        let structs: Vec<String> = self
            .structs
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        if structs.is_empty() {
            return Err(Self::command().error(
                ErrorKind::ValueValidation,
                "--structs needs at least one struct name",
            ));
        }

        let Some(prefix) = self
            .prefix
            .as_deref()
            .or(config.generate.prefix())
            .map(str::to_string)
        else {
            return Err(Self::command().error(
                ErrorKind::MissingRequiredArgument,
                "--prefix is required unless vogen.toml sets generate.prefix",
            ));
        };

        let generate = &config.generate;
        let options = GenerateOptions::new(prefix, structs)
            .with_factory(self.factory || generate.factory.unwrap_or(false))
            .with_raw_values(self.raw_values || generate.raw_values.unwrap_or(false))
            .with_error_scope(
                self.error_scope
                    .or(generate.error_scope)
                    .unwrap_or_default(),
            );

        Ok(Settings {
            options,
            names: OutputNames {
                constructor_suffix: config.output.constructor_suffix().to_string(),
                factory_suffix: config.output.factory_suffix().to_string(),
            },
            format: self.format || config.format.enabled,
        })
    }
}

fn parse_prefix(s: &str) -> std::result::Result<String, String> {
    match vogen_config::invalid_prefix(s) {
        Some(reason) => Err(reason.to_string()),
        None => Ok(s.to_string()),
    }
}
