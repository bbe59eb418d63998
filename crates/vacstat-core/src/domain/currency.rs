use crate::NormalizeError;

/// Multipliers into the base currency (rubles).
const BASELINE: [(&str, f64); 10] = [
    ("AZN", 35.68),
    ("BYR", 23.91),
    ("EUR", 59.90),
    ("GEL", 21.74),
    ("KGS", 0.76),
    ("KZT", 0.13),
    ("RUR", 1.0),
    ("UAH", 1.64),
    ("USD", 60.66),
    ("UZS", 0.0055),
];

/// Immutable currency conversion table.
///
/// Passed explicitly into [`PostingBuilder::build`]; there is no global
/// rate state.
///
/// [`PostingBuilder::build`]: crate::PostingBuilder::build
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    rates: Vec<(String, f64)>,
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            rates: BASELINE
                .iter()
                .map(|&(code, rate)| (code.to_owned(), rate))
                .collect(),
        }
    }
}

impl RateTable {
    /// Converts `amount` in the currency named by `code` into rubles.
    ///
    /// Lookup is case-insensitive.
    pub fn to_rub(&self, amount: f64, code: &str) -> Result<f64, NormalizeError> {
        Ok(amount * self.rate(code)?)
    }

    pub fn rate(&self, code: &str) -> Result<f64, NormalizeError> {
        let code = code.trim();
        self.rates
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(code))
            .map(|(_, rate)| *rate)
            .ok_or_else(|| NormalizeError::UnknownCurrency {
                code: code.to_ascii_uppercase(),
            })
    }
}
