//! Errors raised by the command-line build.

use std::path::PathBuf;

use thiserror::Error;
use tokencss::{DocumentError, RenderError};

/// Error type for the `tokencss` build.
#[derive(Debug, Error)]
pub enum CliError {
    /// The build configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The build configuration file is not valid YAML for a build.
    #[error("invalid config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// The configuration parsed but describes an impossible build.
    #[error("invalid build configuration: {0}")]
    InvalidConfig(String),

    /// A token document could not be read (strict mode only).
    #[error("failed to read token document {path}: {source}")]
    DocumentRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A token document could not be parsed (strict mode only).
    #[error("failed to parse token document {path}: {source}")]
    DocumentParse {
        path: PathBuf,
        source: DocumentError,
    },

    /// The stylesheet template could not be read.
    #[error("failed to read template {path}: {source}")]
    TemplateRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The stylesheet template does not compile.
    #[error("invalid stylesheet template: {0}")]
    Template(#[source] RenderError),

    /// A theme could not be rendered.
    #[error("failed to render theme '{theme}': {source}")]
    Render { theme: String, source: RenderError },

    /// References were left unresolved while running in strict mode.
    #[error("{count} unresolved or circular reference(s); nothing was written")]
    Warnings { count: usize },

    /// A stylesheet could not be written.
    #[error("error writing to {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
