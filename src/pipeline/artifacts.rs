//! Typed run artifacts
//!
//! The engine returns its diagnostics as a first-class value instead of
//! printing them, so callers can log, serialize, or assert on them.

use serde::Serialize;

use crate::splitter::BandStat;
use crate::types::RatingRecord;

/// Aggregate accounting for one filter + split run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SplitReport {
    /// Distinct items in the raw dataset.
    pub items_total: usize,
    /// Distinct items surviving the popularity threshold.
    pub items_retained: usize,
    /// Records in the raw dataset.
    pub records_total: usize,
    /// Records whose item survived the filter.
    pub records_retained: usize,
    /// Records routed to the train side.
    pub train_count: usize,
    /// Records routed to the test side.
    pub test_count: usize,
    /// Per-band accounting, ascending by representative rating value.
    pub bands: Vec<BandStat>,
}

impl SplitReport {
    /// Fraction of distinct items that survived the filter.
    pub fn retained_item_fraction(&self) -> f64 {
        self.items_retained as f64 / self.items_total as f64
    }

    /// Fraction of filtered records routed to train.
    pub fn train_fraction(&self) -> f64 {
        self.train_count as f64 / self.records_retained as f64
    }

    /// Fraction of filtered records routed to test.
    pub fn test_fraction(&self) -> f64 {
        self.test_count as f64 / self.records_retained as f64
    }
}

/// Complete output of a run: the filtered record set, its disjoint
/// train/test partition, and the accounting report.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitOutput {
    /// All records whose item survived the popularity filter, input order.
    pub filtered: Vec<RatingRecord>,
    /// Train-side records.
    pub train: Vec<RatingRecord>,
    /// Test-side records.
    pub test: Vec<RatingRecord>,
    /// Run accounting.
    pub report: SplitReport,
}
