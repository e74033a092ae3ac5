// src/cli.rs
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use crate::config::consts::{ DEFAULT_INPUT, DEFAULT_OUTPUT };
use crate::config::options::AppOptions;
use crate::error::RunError;
use crate::runner;

/// Extract student names from a saved class list page, one "First Last" per line.
#[derive(Parser, Debug)]
#[command(name = "classlist_names", version, about)]
pub struct Cli {
    /// Saved class list page (HTML)
    #[arg(default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Where to write the names
    #[arg(default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
}

impl Cli {
    pub fn options(&self) -> AppOptions {
        AppOptions::new(&self.input, &self.output)
    }
}

/// Parse args, run once, print the outcome.
/// Expected failures (missing input, nothing found) print a line and map to
/// their exit status; IO failures bubble up as a report.
pub fn run() -> color_eyre::Result<ExitCode> {
    crate::log::init();
    let cli = Cli::parse();
    run_with(&cli.options())
}

pub fn run_with(opts: &AppOptions) -> color_eyre::Result<ExitCode> {
    match runner::run(opts) {
        Ok(summary) => {
            println!("Wrote {} names to {}", summary.count, summary.output.display());
            Ok(ExitCode::SUCCESS)
        }
        Err(e) if e.is_expected() => {
            println!("{}", user_message(&e));
            Ok(ExitCode::from(e.exit_code()))
        }
        Err(e) => Err(e.into()),
    }
}

fn user_message(e: &RunError) -> String {
    match e {
        RunError::NoNames => e.to_string(),
        _ => format!("Error: {e}"),
    }
}
