//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Generate CSS custom properties from design-token documents.
///
/// Without a config file, reads `dark.json`, `light.json`, `tokens.json` and
/// `global.json` from `--dir` and writes `dark.css`, `light.css` and
/// `global.css`.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "tokencss", version, about, long_about)]
pub struct Cli {
    /// Build configuration file (YAML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory holding the input documents [default: config file's directory, or .]
    #[arg(short, long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Directory for the generated stylesheets [default: --dir]
    #[arg(short, long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Shared token document [default: tokens.json]
    #[arg(long, value_name = "FILE")]
    pub tokens: Option<PathBuf>,

    /// Global token document [default: global.json]
    #[arg(long, value_name = "FILE")]
    pub globals: Option<PathBuf>,

    /// Custom stylesheet template (MiniJinja)
    #[arg(long, value_name = "FILE")]
    pub template: Option<PathBuf>,

    /// Fail on unreadable documents and on any unresolved or circular reference
    #[arg(long)]
    pub strict: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only report errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}
