//! Train/test splitting
//!
//! Two interchangeable algorithms produce a rating-value-stratified
//! partition:
//!
//! - [`stratified`] — enumerate rating bands explicitly and split each band
//!   independently (the banded loop of the original large-scale pipeline)
//! - [`global`] — one call to the generic stratified sampling primitive with
//!   the band index as the label (the original small-scale variant)
//!
//! Both are seed-deterministic, complete, and exclusive; [`split`] dispatches
//! on [`SplitMode`].

pub mod global;
pub mod stratified;

use crate::errors::{Result, SplitError};
use crate::types::{RatingRecord, SplitConfig, SplitMode};

/// Per-band accounting produced alongside a partition.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct BandStat {
    /// Representative rating value of the band.
    pub value: f64,
    /// Number of records in the band.
    pub total: usize,
    /// Number of the band's records routed to the test side.
    pub test: usize,
}

/// A train/test partition expressed as indices into the input slice,
/// both sides in ascending index order.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    /// Indices of train records.
    pub train: Vec<usize>,
    /// Indices of test records.
    pub test: Vec<usize>,
    /// Per-band accounting, in ascending representative order.
    pub bands: Vec<BandStat>,
}

impl Partition {
    /// Fraction of records on the train side.
    pub fn train_fraction(&self) -> f64 {
        self.train.len() as f64 / (self.train.len() + self.test.len()) as f64
    }

    /// Fraction of records on the test side.
    pub fn test_fraction(&self) -> f64 {
        self.test.len() as f64 / (self.train.len() + self.test.len()) as f64
    }
}

/// Partition `records` into train and test indices according to `config`.
///
/// Validates the configuration, rejects an empty input, runs the configured
/// algorithm, and logs the resulting train/test percentages.
pub fn split(records: &[RatingRecord], config: &SplitConfig) -> Result<Partition> {
    config.validate()?;

    if records.is_empty() {
        return Err(SplitError::empty_dataset("no records to split"));
    }

    let partition = match config.mode {
        SplitMode::Banded => stratified::split_banded(records, config)?,
        SplitMode::Global => global::split_global(records, config)?,
    };

    let total = records.len() as f64;
    tracing::info!(
        "{:.2} percent of ratings used for training",
        partition.train.len() as f64 / total * 100.0
    );
    tracing::info!(
        "{:.2} percent of ratings used for testing",
        partition.test.len() as f64 / total * 100.0
    );

    Ok(partition)
}

/// Like [`split`], but materializes the two record sets.
pub fn split_records(
    records: &[RatingRecord],
    config: &SplitConfig,
) -> Result<(Vec<RatingRecord>, Vec<RatingRecord>)> {
    let partition = split(records, config)?;
    let train = partition.train.iter().map(|&i| records[i].clone()).collect();
    let test = partition.test.iter().map(|&i| records[i].clone()).collect();
    Ok((train, test))
}
