//! Global split mode
//!
//! Instead of looping over rating bands, this mode labels every record with
//! its band index and makes a single call to the generic stratified sampling
//! primitive. Same guarantees as the banded loop: seed-determinism, complete
//! and exclusive partition, stratification by rating value.

use crate::bands;
use crate::errors::Result;
use crate::sampling;
use crate::splitter::{BandStat, Partition};
use crate::types::{RatingRecord, SplitConfig};

/// Split via one stratified sample with the band index as the label.
///
/// Precondition (checked by [`super::split`]): `config` is valid and
/// `records` is non-empty.
pub fn split_global(records: &[RatingRecord], config: &SplitConfig) -> Result<Partition> {
    let reps = bands::band_values(records, config.epsilon);
    let labels: Vec<usize> = records
        .iter()
        .map(|r| bands::assign(r.rating, &reps))
        .collect();

    let (train, test) = sampling::stratified_partition(&labels, config.test_frac, config.seed);

    let mut totals = vec![0usize; reps.len()];
    for &label in &labels {
        totals[label] += 1;
    }
    let mut test_counts = vec![0usize; reps.len()];
    for &i in &test {
        test_counts[labels[i]] += 1;
    }

    let band_stats = reps
        .iter()
        .zip(totals.iter().zip(test_counts.iter()))
        .map(|(&value, (&total, &test))| BandStat { value, total, test })
        .collect();

    Ok(Partition {
        train,
        test,
        bands: band_stats,
    })
}
