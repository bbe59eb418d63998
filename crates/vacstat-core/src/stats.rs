use serde::Serialize;

use crate::dataset::Dataset;
use crate::domain::Posting;

/// Cities whose rounded share of all postings falls below this are dropped
/// from both rankings entirely, not just hidden from display.
pub const MIN_CITY_SHARE: f64 = 0.01;

/// Per-group salary level and posting volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearStats {
    pub average: i64,
    pub count: usize,
}

/// A city's fraction of all accepted postings, rounded to 4 decimals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityShare {
    pub city: String,
    pub share: f64,
}

/// A city's floored average midpoint salary in rubles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityAverage {
    pub city: String,
    pub average: i64,
}

/// Both city rankings, each sorted descending by its own metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityBreakdown {
    pub shares: Vec<CityShare>,
    pub averages: Vec<CityAverage>,
}

/// Per-year averages and counts over every accepted posting, keyed in
/// year-of-first-appearance order.
pub fn yearly_stats(dataset: &Dataset) -> Vec<(String, YearStats)> {
    yearly_stats_where(dataset, |_| true)
}

/// Same year keys as [`yearly_stats`], with counts and averages restricted
/// to postings satisfying `predicate`. Years the predicate empties out stay
/// present with `count = 0, average = 0`.
pub fn yearly_stats_where<F>(dataset: &Dataset, predicate: F) -> Vec<(String, YearStats)>
where
    F: Fn(&Posting) -> bool,
{
    dataset
        .year_groups()
        .into_iter()
        .map(|(year, postings)| {
            let matched: Vec<&Posting> =
                postings.into_iter().filter(|&p| predicate(p)).collect();
            (year.to_owned(), group_stats(&matched))
        })
        .collect()
}

fn group_stats(postings: &[&Posting]) -> YearStats {
    if postings.is_empty() {
        return YearStats {
            average: 0,
            count: 0,
        };
    }

    YearStats {
        average: floored_average(postings),
        count: postings.len(),
    }
}

fn floored_average(postings: &[&Posting]) -> i64 {
    let sum: f64 = postings.iter().map(|p| p.salary_midpoint_rub).sum();
    (sum / postings.len() as f64).floor() as i64
}

/// City rankings: share of all postings and floored average salary.
///
/// The [`MIN_CITY_SHARE`] cutoff is applied to the 4-decimal-rounded share
/// before ranking. Both lists are sorted descending with stable ties, so
/// cities with equal metrics keep their first-appearance order.
pub fn city_breakdown(dataset: &Dataset) -> CityBreakdown {
    let total = dataset.total() as f64;
    let mut shares = Vec::new();
    let mut averages = Vec::new();

    for (city, postings) in dataset.area_groups() {
        let share = round4(postings.len() as f64 / total);
        if share < MIN_CITY_SHARE {
            continue;
        }

        averages.push(CityAverage {
            city: city.to_owned(),
            average: floored_average(&postings),
        });
        shares.push(CityShare {
            city: city.to_owned(),
            share,
        });
    }

    shares.sort_by(|a, b| b.share.total_cmp(&a.share));
    averages.sort_by(|a, b| b.average.cmp(&a.average));

    CityBreakdown { shares, averages }
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// One year's statistics, overall and under the title filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearRow {
    pub year: String,
    pub all: YearStats,
    pub filtered: YearStats,
}

/// Everything the output collaborators consume, in one serializable value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsReport {
    pub title_filter: String,
    pub years: Vec<YearRow>,
    pub city_shares: Vec<CityShare>,
    pub city_averages: Vec<CityAverage>,
    pub total: usize,
    pub skipped: usize,
}

impl StatsReport {
    /// Runs the whole aggregation over a loaded dataset.
    ///
    /// Pure function of the dataset state: calling it twice yields
    /// identical results.
    pub fn build(dataset: &Dataset, title_filter: &str) -> Self {
        let all = yearly_stats(dataset);
        let filtered = yearly_stats_where(dataset, |p| p.title_contains(title_filter));

        let years = all
            .into_iter()
            .zip(filtered)
            .map(|((year, all), (_, filtered))| YearRow {
                year,
                all,
                filtered,
            })
            .collect();

        let CityBreakdown { shares, averages } = city_breakdown(dataset);

        Self {
            title_filter: title_filter.to_owned(),
            years,
            city_shares: shares,
            city_averages: averages,
            total: dataset.total(),
            skipped: dataset.skipped(),
        }
    }
}
