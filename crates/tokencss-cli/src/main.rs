use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use console::style;
use tokencss_cli::{init_logging, run, BuildReport, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match run(&cli).context("tokencss build failed") {
        Ok(report) => {
            if !cli.quiet {
                print_report(&report);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{} {:#}", style("error:").red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn print_report(report: &BuildReport) {
    for theme in &report.themes {
        let mut line = format!(
            "{} {}",
            style("Successfully wrote CSS to").green(),
            style(theme.path.display()).bold()
        );
        if theme.warnings > 0 {
            line.push_str(&format!(
                " {}",
                style(format!("({} warning(s))", theme.warnings)).yellow()
            ));
        }
        println!("{line}");
    }
}
