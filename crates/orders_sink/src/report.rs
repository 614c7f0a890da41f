//! Batch summaries for operator output.
//!
//! Mirrors the statistics block the reference generator prints after a
//! run: total rows, per-category counts, and the creation-date range.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;

use orders_core::types::OrderRecord;

/// Summary statistics over one generated batch.
///
/// Count maps are keyed by the dataset's snake_case names and ordered
/// deterministically.
///
/// # Examples
///
/// ```rust
/// use orders_sink::BatchSummary;
///
/// let summary = BatchSummary::from_records(&[]);
/// assert_eq!(summary.rows, 0);
/// assert!(summary.creation_date_range.is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchSummary {
    /// Total number of records.
    pub rows: usize,
    /// Record count per order type.
    pub order_types: BTreeMap<String, usize>,
    /// Record count per status.
    pub statuses: BTreeMap<String, usize>,
    /// Record count per buy currency.
    pub buy_currencies: BTreeMap<String, usize>,
    /// Earliest and latest creation dates, when the batch is non-empty.
    pub creation_date_range: Option<(NaiveDate, NaiveDate)>,
}

impl BatchSummary {
    /// Computes summary statistics for a batch.
    pub fn from_records(records: &[OrderRecord]) -> Self {
        let mut order_types = BTreeMap::new();
        let mut statuses = BTreeMap::new();
        let mut buy_currencies = BTreeMap::new();
        let mut creation_date_range: Option<(NaiveDate, NaiveDate)> = None;

        for record in records {
            *order_types
                .entry(record.order_type.as_str().to_string())
                .or_insert(0) += 1;
            *statuses
                .entry(record.status.as_str().to_string())
                .or_insert(0) += 1;
            *buy_currencies
                .entry(record.buy_currency.code().to_string())
                .or_insert(0) += 1;

            creation_date_range = Some(match creation_date_range {
                None => (record.creation_date, record.creation_date),
                Some((min, max)) => (
                    min.min(record.creation_date),
                    max.max(record.creation_date),
                ),
            });
        }

        Self {
            rows: records.len(),
            order_types,
            statuses,
            buy_currencies,
            creation_date_range,
        }
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total rows: {}", self.rows)?;
        writeln!(f, "Order types: {:?}", self.order_types)?;
        writeln!(f, "Statuses: {:?}", self.statuses)?;
        writeln!(f, "Currencies (buy): {:?}", self.buy_currencies)?;
        match self.creation_date_range {
            Some((min, max)) => write!(f, "Date range: {min} to {max}"),
            None => write!(f, "Date range: empty batch"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orders_core::config::GeneratorConfig;
    use orders_engine::{OrderGenerator, OrderRng};

    fn sample_records(n: usize) -> Vec<OrderRecord> {
        let today = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        let generator = OrderGenerator::with_today(GeneratorConfig::default(), today).unwrap();
        let mut rng = OrderRng::from_seed(42);
        generator.generate(n, &mut rng)
    }

    #[test]
    fn test_counts_sum_to_rows() {
        let summary = BatchSummary::from_records(&sample_records(2_000));
        assert_eq!(summary.rows, 2_000);
        assert_eq!(summary.order_types.values().sum::<usize>(), 2_000);
        assert_eq!(summary.statuses.values().sum::<usize>(), 2_000);
        assert_eq!(summary.buy_currencies.values().sum::<usize>(), 2_000);
    }

    #[test]
    fn test_date_range_ordered() {
        let summary = BatchSummary::from_records(&sample_records(2_000));
        let (min, max) = summary.creation_date_range.unwrap();
        assert!(min <= max);
    }

    #[test]
    fn test_empty_batch_summary() {
        let summary = BatchSummary::from_records(&[]);
        assert_eq!(summary.rows, 0);
        assert!(summary.order_types.is_empty());
        assert!(summary.creation_date_range.is_none());
        assert!(format!("{}", summary).contains("empty batch"));
    }

    #[test]
    fn test_display_contains_counts() {
        let summary = BatchSummary::from_records(&sample_records(100));
        let text = format!("{}", summary);
        assert!(text.contains("Total rows: 100"));
        assert!(text.contains("chain"));
        assert!(text.contains("Date range:"));
    }
}
