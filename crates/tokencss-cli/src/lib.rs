//! # tokencss-cli
//!
//! Command-line build around [`tokencss`]: read theme, token and global
//! documents, resolve every `{path}` reference, and write one stylesheet of
//! CSS custom properties per theme.
//!
//! The build is driven by [`BuildConfig`], loaded from a YAML file with
//! `--config` or defaulted to the dark, light and global themes.
//!
//! ```no_run
//! use clap::Parser;
//! use tokencss_cli::{run, Cli};
//!
//! let cli = Cli::parse_from(["tokencss", "--dir", "themes", "--out-dir", "dist"]);
//! let report = run(&cli)?;
//! for theme in &report.themes {
//!     println!("{} -> {}", theme.name, theme.path.display());
//! }
//! # Ok::<(), tokencss_cli::CliError>(())
//! ```

pub mod build;
pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod logging;

pub use build::{run_build, BuildReport, WrittenTheme};
pub use cli::Cli;
pub use config::{base_dir, resolve_config, BuildConfig, ThemeConfig};
pub use error::CliError;
pub use loader::load_document;
pub use logging::init_logging;

/// Runs the build described by the command-line arguments.
pub fn run(cli: &Cli) -> Result<BuildReport, CliError> {
    let config = resolve_config(cli)?;
    run_build(&config, &base_dir(cli))
}
