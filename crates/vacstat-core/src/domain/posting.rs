use serde::Serialize;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

use crate::{NormalizeError, RateTable};

/// ISO-8601-like timestamp with optional seconds and a mandatory offset,
/// e.g. `2022-07-05T18:19:30+03:00` or `2023-01-15T00:00+03:00`.
const PUBLISHED_AT_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    version = 2,
    "[year]-[month]-[day]T[hour]:[minute][optional [:[second]]][offset_hour sign:mandatory]:[offset_minute]"
);

/// One normalized job posting: cleaned title, midpoint salary in rubles,
/// cleaned city name and publication year.
///
/// Immutable after construction; built only through [`PostingBuilder`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Posting {
    pub name: String,
    pub salary_midpoint_rub: f64,
    pub area: String,
    pub year: String,
}

impl Posting {
    /// Case-sensitive substring match on the cleaned title.
    pub fn title_contains(&self, needle: &str) -> bool {
        self.name.contains(needle)
    }
}

/// Accumulates cleaned raw fields and performs a single validating
/// construction call. A [`Posting`] is either fully valid or never created.
#[derive(Debug, Default, Clone)]
pub struct PostingBuilder {
    name: Option<String>,
    salary_from: Option<String>,
    salary_to: Option<String>,
    salary_currency: Option<String>,
    area_name: Option<String>,
    published_at: Option<String>,
}

impl PostingBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&mut self, value: String) {
        self.name = Some(value);
    }

    pub fn salary_from(&mut self, value: String) {
        self.salary_from = Some(value);
    }

    pub fn salary_to(&mut self, value: String) {
        self.salary_to = Some(value);
    }

    pub fn salary_currency(&mut self, value: String) {
        self.salary_currency = Some(value);
    }

    pub fn area_name(&mut self, value: String) {
        self.area_name = Some(value);
    }

    pub fn published_at(&mut self, value: String) {
        self.published_at = Some(value);
    }

    /// Finalizes the record: parses the salary bounds, converts the
    /// midpoint into rubles and extracts the publication year.
    pub fn build(self, rates: &RateTable) -> Result<Posting, NormalizeError> {
        let name = require("name", self.name)?;
        let from = parse_bound("salary_from", self.salary_from)?;
        let to = parse_bound("salary_to", self.salary_to)?;
        let currency = require("salary_currency", self.salary_currency)?;
        let area = require("area_name", self.area_name)?;
        let published_at = require("published_at", self.published_at)?;

        let salary_midpoint_rub = rates.to_rub((from + to) / 2.0, &currency)?;
        let year = published_year(&published_at)?;

        Ok(Posting {
            name,
            salary_midpoint_rub,
            area,
            year,
        })
    }
}

fn require(field: &'static str, value: Option<String>) -> Result<String, NormalizeError> {
    value.ok_or(NormalizeError::MissingField { field })
}

fn parse_bound(field: &'static str, value: Option<String>) -> Result<f64, NormalizeError> {
    let value = require(field, value)?;
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| NormalizeError::InvalidSalary { field, value })
}

/// Extracts the calendar year from the raw timestamp.
///
/// The source data writes offsets without a colon (`+0300`), so the last
/// two characters are the offset minutes and get a colon inserted in front
/// before ISO-8601 parsing.
fn published_year(raw: &str) -> Result<String, NormalizeError> {
    if raw.len() < 2 || !raw.is_char_boundary(raw.len() - 2) {
        return Err(NormalizeError::InvalidTimestamp {
            value: raw.to_owned(),
        });
    }

    let (head, offset_minutes) = raw.split_at(raw.len() - 2);
    let normalized = format!("{head}:{offset_minutes}");

    let parsed = OffsetDateTime::parse(&normalized, PUBLISHED_AT_FORMAT).map_err(|_| {
        NormalizeError::InvalidTimestamp {
            value: raw.to_owned(),
        }
    })?;

    Ok(parsed.year().to_string())
}
