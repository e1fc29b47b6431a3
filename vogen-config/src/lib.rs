//! `vogen.toml` configuration.
//!
//! Every key is optional; command line flags take precedence over the file.
//!
//! ```toml
//! [generate]
//! prefix = "New"
//! factory = true
//! raw_values = false
//! error_scope = "global"   # or "per-struct"
//!
//! [output]
//! constructor_suffix = "_vo_gen.go"
//! factory_suffix = "_factory_gen.go"
//!
//! [format]
//! enabled = false
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;

pub use config::{
    Config, DEFAULT_CONFIG_FILE, DEFAULT_CONSTRUCTOR_SUFFIX, DEFAULT_FACTORY_SUFFIX, FormatConfig,
    GenerateConfig, OutputConfig, invalid_prefix,
};
pub use error::{Error, Result, SourceContext};
