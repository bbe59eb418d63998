use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Aggregate salary and volume statistics from a job-postings CSV.
///
/// Produces per-year average salaries and posting counts (overall and for a
/// chosen job title) plus ranked per-city posting shares and salary levels.
#[derive(Debug, Parser)]
#[command(name = "vacstat", version, about = "Job-posting salary statistics")]
pub struct Cli {
    /// CSV file with job postings. The first row is the header; recognized
    /// columns are name, salary_from, salary_to, salary_currency,
    /// area_name, published_at.
    pub file: PathBuf,

    /// Job title for the filtered yearly statistics (case-sensitive
    /// substring match on the posting name).
    #[arg(long, default_value = "")]
    pub title: String,

    /// Output format for results.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, default_value_t = false)]
    pub pretty: bool,

    /// How many cities to show per ranking in table output.
    #[arg(long, default_value_t = 10)]
    pub top: usize,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain-text blocks for terminal display.
    Table,
    /// Single JSON object output.
    Json,
}
