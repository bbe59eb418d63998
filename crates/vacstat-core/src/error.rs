use thiserror::Error;

/// Per-row normalization failures.
///
/// A row that fails normalization is skipped by the loader, never fatal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    /// Kept distinguishable from the other variants: an unknown code points
    /// at a stale rate table rather than bad input data.
    #[error("unknown currency code '{code}'")]
    UnknownCurrency { code: String },

    #[error("field '{field}' is not a number: '{value}'")]
    InvalidSalary { field: &'static str, value: String },

    #[error("cannot parse timestamp '{value}'")]
    InvalidTimestamp { value: String },

    #[error("required field '{field}' is missing")]
    MissingField { field: &'static str },
}

impl NormalizeError {
    pub const fn is_unknown_currency(&self) -> bool {
        matches!(self, Self::UnknownCurrency { .. })
    }
}

/// Loader-level failures that abort the pipeline.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("no rows were accepted from the input")]
    Empty,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("csv stream error: {0}")]
    Csv(#[from] csv::Error),
}
