//! Log output for the command line.

use tracing_subscriber::{fmt, EnvFilter};

/// Picks the default filter for the verbosity flags.
///
/// Warnings are shown by default since unresolved references are reported
/// through them. `--quiet` keeps only errors.
pub fn default_filter(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info,tokencss=debug,tokencss_cli=debug",
        _ => "trace",
    }
}

/// Initializes logging on stderr.
///
/// `RUST_LOG` overrides the filter picked from the flags. Calling this more
/// than once is harmless.
pub fn init_logging(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose, quiet)));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}
