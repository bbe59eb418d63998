use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::domain::{Posting, PostingBuilder, RateTable};
use crate::error::DatasetError;
use crate::normalize::ColumnKind;

/// Groups posting indices by key, iterable in first-appearance order.
#[derive(Debug, Default)]
struct GroupIndex {
    keys: Vec<String>,
    buckets: HashMap<String, Vec<usize>>,
}

impl GroupIndex {
    fn insert(&mut self, key: &str, posting: usize) {
        if !self.buckets.contains_key(key) {
            self.keys.push(key.to_owned());
        }
        self.buckets.entry(key.to_owned()).or_default().push(posting);
    }

    fn iter(&self) -> impl Iterator<Item = (&str, &[usize])> {
        self.keys
            .iter()
            .map(|key| (key.as_str(), self.buckets[key].as_slice()))
    }
}

/// The full collection of accepted postings plus the year and city indexes
/// the aggregation engine reads through.
///
/// Populated once by [`Dataset::load`], read-only afterward.
#[derive(Debug)]
pub struct Dataset {
    postings: Vec<Posting>,
    years: GroupIndex,
    areas: GroupIndex,
    skipped: usize,
    unknown_currency: usize,
}

impl Dataset {
    pub fn load_path(path: impl AsRef<Path>, rates: &RateTable) -> Result<Self, DatasetError> {
        let file = File::open(path)?;
        Self::load(file, rates)
    }

    /// Streams CSV rows from `reader`.
    ///
    /// The first record is always treated as the header, whatever it
    /// contains; a leading UTF-8 BOM is tolerated. A row is skipped when it
    /// has an empty field, fewer fields than `header - 1`, or fails
    /// normalization. Fails with [`DatasetError::Empty`] when nothing is
    /// accepted.
    pub fn load(reader: impl Read, rates: &RateTable) -> Result<Self, DatasetError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut records = csv_reader.records();
        let header = match records.next() {
            Some(record) => record?,
            None => return Err(DatasetError::Empty),
        };
        let header_len = header.len();
        let columns: Vec<Option<ColumnKind>> =
            header.iter().map(ColumnKind::from_header).collect();

        let mut dataset = Self {
            postings: Vec::new(),
            years: GroupIndex::default(),
            areas: GroupIndex::default(),
            skipped: 0,
            unknown_currency: 0,
        };

        for record in records {
            let record = record?;

            if record.iter().any(str::is_empty) || record.len() + 1 < header_len {
                dataset.skipped += 1;
                continue;
            }

            let mut builder = PostingBuilder::new();
            for (column, raw) in columns.iter().zip(record.iter()) {
                if let Some(kind) = column {
                    kind.apply(&mut builder, raw);
                }
            }

            match builder.build(rates) {
                Ok(posting) => dataset.push(posting),
                Err(error) => {
                    dataset.skipped += 1;
                    if error.is_unknown_currency() {
                        dataset.unknown_currency += 1;
                    }
                }
            }
        }

        if dataset.postings.is_empty() {
            return Err(DatasetError::Empty);
        }

        Ok(dataset)
    }

    fn push(&mut self, posting: Posting) {
        let index = self.postings.len();
        self.years.insert(&posting.year, index);
        self.areas.insert(&posting.area, index);
        self.postings.push(posting);
    }

    /// Number of accepted postings.
    pub fn total(&self) -> usize {
        self.postings.len()
    }

    /// Rows rejected by shape checks or normalization.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Subset of [`Dataset::skipped`] rejected for an unknown currency code.
    pub fn unknown_currency(&self) -> usize {
        self.unknown_currency
    }

    pub fn postings(&self) -> &[Posting] {
        &self.postings
    }

    /// Year keys with their postings, in year-of-first-appearance order.
    pub fn year_groups(&self) -> Vec<(&str, Vec<&Posting>)> {
        self.resolve(self.years.iter())
    }

    /// City keys with their postings, in first-appearance order.
    pub fn area_groups(&self) -> Vec<(&str, Vec<&Posting>)> {
        self.resolve(self.areas.iter())
    }

    fn resolve<'a>(
        &'a self,
        groups: impl Iterator<Item = (&'a str, &'a [usize])>,
    ) -> Vec<(&'a str, Vec<&'a Posting>)> {
        groups
            .map(|(key, indices)| (key, indices.iter().map(|&i| &self.postings[i]).collect()))
            .collect()
    }
}
