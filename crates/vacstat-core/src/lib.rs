//! Core pipeline for vacstat.
//!
//! This crate contains:
//! - Canonical posting model with validated, all-or-nothing construction
//! - The fixed currency-to-ruble rate table
//! - CSV dataset loading with a row-level skip policy
//! - Year and city aggregation with ranked city extraction

pub mod dataset;
pub mod domain;
pub mod error;
pub mod normalize;
pub mod stats;

pub use dataset::Dataset;
pub use domain::{Posting, PostingBuilder, RateTable};
pub use error::{DatasetError, NormalizeError};
pub use normalize::{clean_text, ColumnKind};
pub use stats::{
    city_breakdown, yearly_stats, yearly_stats_where, CityAverage, CityBreakdown, CityShare,
    StatsReport, YearRow, YearStats, MIN_CITY_SHARE,
};
