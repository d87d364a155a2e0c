//! Build configuration.
//!
//! A build reads two shared documents (tokens and globals) and renders one
//! stylesheet per theme. The configuration can come from a YAML file:
//!
//! ```yaml
//! tokens: tokens.json
//! globals: global.json
//! out_dir: dist
//! strict: false
//! themes:
//!   - name: dark
//!     input: dark.json
//!     selector: '[data-theme="dark"]'
//!   - name: light
//!     input: light.json
//!   - name: global
//!     comment: Global variables
//! ```
//!
//! A theme without `input` renders the globals document itself. Without a
//! file, [`BuildConfig::default`] reproduces the dark/light/global build.
//! Relative paths are resolved against the base directory (`--dir`, else
//! the config file's directory, else the working directory).

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::cli::Cli;
use crate::error::CliError;

/// Build-wide settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Shared token document.
    pub tokens: PathBuf,
    /// Global token document, looked up under `global.<path>`.
    pub globals: PathBuf,
    /// Output directory; defaults to the base directory.
    pub out_dir: Option<PathBuf>,
    /// Custom stylesheet template.
    pub template: Option<PathBuf>,
    /// Fail on unreadable documents and on any warning.
    pub strict: bool,
    pub themes: Vec<ThemeConfig>,
}

/// One theme to render.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    pub name: String,
    /// Theme document; the globals document is used when absent.
    #[serde(default)]
    pub input: Option<PathBuf>,
    /// Stylesheet path; defaults to `<name>.css`.
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub selector: Option<String>,
}

impl ThemeConfig {
    /// A theme read from `input`.
    pub fn new(name: impl Into<String>, input: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            input: Some(input.into()),
            output: None,
            comment: None,
            selector: None,
        }
    }

    /// A theme rendering the globals document.
    pub fn globals(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            input: None,
            output: None,
            comment: None,
            selector: None,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Returns the output file name.
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("{}.css", self.name)))
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            tokens: PathBuf::from("tokens.json"),
            globals: PathBuf::from("global.json"),
            out_dir: None,
            template: None,
            strict: false,
            themes: default_themes(),
        }
    }
}

/// The dark, light and global themes.
pub fn default_themes() -> Vec<ThemeConfig> {
    vec![
        ThemeConfig::new("dark", "dark.json"),
        ThemeConfig::new("light", "light.json"),
        ThemeConfig::globals("global").with_comment("Global variables"),
    ]
}

impl BuildConfig {
    /// Parses a configuration from YAML text.
    pub fn from_yaml_str(source: &str, path: &Path) -> Result<Self, CliError> {
        serde_yaml::from_str(source).map_err(|source| CliError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reads a configuration file.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let source = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&source, path)
    }

    /// Applies command-line overrides.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(tokens) = &cli.tokens {
            self.tokens = tokens.clone();
        }
        if let Some(globals) = &cli.globals {
            self.globals = globals.clone();
        }
        if let Some(out_dir) = &cli.out_dir {
            self.out_dir = Some(out_dir.clone());
        }
        if let Some(template) = &cli.template {
            self.template = Some(template.clone());
        }
        self.strict |= cli.strict;
    }

    /// Checks that the build can run.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::InvalidConfig`] when there are no themes, when two
    /// themes share a name or an output file, or when a name is empty.
    pub fn validate(&self) -> Result<(), CliError> {
        if self.themes.is_empty() {
            return Err(CliError::InvalidConfig("no themes configured".to_string()));
        }
        let mut names = HashSet::new();
        let mut outputs = HashSet::new();
        for theme in &self.themes {
            if theme.name.trim().is_empty() {
                return Err(CliError::InvalidConfig("theme name cannot be empty".to_string()));
            }
            if !names.insert(theme.name.as_str()) {
                return Err(CliError::InvalidConfig(format!(
                    "theme '{}' is configured twice",
                    theme.name
                )));
            }
            let output = theme.output_path();
            if !outputs.insert(output.clone()) {
                return Err(CliError::InvalidConfig(format!(
                    "theme '{}' writes to {}, which another theme already writes",
                    theme.name,
                    output.display()
                )));
            }
        }
        Ok(())
    }
}

/// Picks the base directory for relative paths.
pub fn base_dir(cli: &Cli) -> PathBuf {
    if let Some(dir) = &cli.dir {
        return dir.clone();
    }
    cli.config
        .as_deref()
        .and_then(Path::parent)
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Loads the configuration named by the arguments (or the default one),
/// applies overrides and validates it.
pub fn resolve_config(cli: &Cli) -> Result<BuildConfig, CliError> {
    let mut config = match &cli.config {
        Some(path) => BuildConfig::load(path)?,
        None => BuildConfig::default(),
    };
    config.apply_cli(cli);
    config.validate()?;
    Ok(config)
}
