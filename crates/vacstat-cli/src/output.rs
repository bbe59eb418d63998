use vacstat_core::StatsReport;

use crate::cli::OutputFormat;
use crate::error::CliError;

pub fn render(
    report: &StatsReport,
    format: OutputFormat,
    pretty: bool,
    top: usize,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(report)?
            } else {
                serde_json::to_string(report)?
            };
            println!("{payload}");
        }
        OutputFormat::Table => render_table(report, top),
    }

    Ok(())
}

fn render_table(report: &StatsReport, top: usize) {
    println!(
        "Salary by year: {}",
        braces(
            report
                .years
                .iter()
                .map(|row| format!("{}: {}", row.year, row.all.average))
        )
    );
    println!(
        "Postings by year: {}",
        braces(
            report
                .years
                .iter()
                .map(|row| format!("{}: {}", row.year, row.all.count))
        )
    );

    if !report.title_filter.is_empty() {
        println!(
            "Salary by year for '{}': {}",
            report.title_filter,
            braces(
                report
                    .years
                    .iter()
                    .map(|row| format!("{}: {}", row.year, row.filtered.average))
            )
        );
        println!(
            "Postings by year for '{}': {}",
            report.title_filter,
            braces(
                report
                    .years
                    .iter()
                    .map(|row| format!("{}: {}", row.year, row.filtered.count))
            )
        );
    }

    // The core returns the full post-threshold ranking; truncation to the
    // top N is a display concern.
    println!(
        "Salary by city (descending): {}",
        braces(
            report
                .city_averages
                .iter()
                .take(top)
                .map(|c| format!("'{}': {}", c.city, c.average))
        )
    );
    println!(
        "Share of postings by city (descending): {}",
        braces(
            report
                .city_shares
                .iter()
                .take(top)
                .map(|c| format!("'{}': {}", c.city, c.share))
        )
    );
}

fn braces(items: impl Iterator<Item = String>) -> String {
    format!("{{{}}}", items.collect::<Vec<_>>().join(", "))
}
