mod cli;
mod error;
mod output;

use clap::Parser;
use vacstat_core::{Dataset, RateTable, StatsReport};

use crate::cli::Cli;
use crate::error::CliError;

fn main() {
    if let Err(error) = run() {
        eprintln!("error: {error}");
        std::process::exit(error.exit_code());
    }
}

fn run() -> Result<(), CliError> {
    let cli = Cli::parse();

    let rates = RateTable::default();
    let dataset = Dataset::load_path(&cli.file, &rates)?;

    if dataset.skipped() > 0 {
        eprintln!(
            "warning: {} rows skipped ({} with an unknown currency code)",
            dataset.skipped(),
            dataset.unknown_currency()
        );
    }

    let report = StatsReport::build(&dataset, &cli.title);
    output::render(&report, cli.format, cli.pretty, cli.top)?;

    Ok(())
}
