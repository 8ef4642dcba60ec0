//! Banded stratified splitter
//!
//! Enumerates the rating bands present in the input and partitions each band
//! independently with a seeded shuffle-and-cut. The per-band results are
//! merged in ascending band order, so the output is identical whether bands
//! run sequentially or in parallel.
//!
//! The same seed value is reused for every band. This mirrors the original
//! pipeline: bands are not independently randomized relative to each other,
//! but the full partition is reproducible from the single configured seed.

use rayon::prelude::*;

use crate::bands;
use crate::errors::{Result, SplitError};
use crate::sampling;
use crate::splitter::{BandStat, Partition};
use crate::types::{RatingRecord, SplitConfig};

/// Split each rating band independently and merge the results.
///
/// Precondition (checked by [`super::split`]): `config` is valid and
/// `records` is non-empty.
pub fn split_banded(records: &[RatingRecord], config: &SplitConfig) -> Result<Partition> {
    let groups = bands::group_by_band(records, config.epsilon);

    let per_band: Vec<(BandStat, Vec<usize>, Vec<usize>)> = config.runtime.scoped(|| {
        groups
            .par_iter()
            .map(|(rep, indices)| {
                // A band exists only because at least one record produced
                // its representative; an empty band is a logic error.
                if indices.is_empty() {
                    return Err(SplitError::internal(format!(
                        "rating band {} contains no records",
                        rep
                    )));
                }

                let (train_pos, test_pos) =
                    sampling::seeded_partition(indices.len(), config.test_frac, config.seed);

                let stat = BandStat {
                    value: *rep,
                    total: indices.len(),
                    test: test_pos.len(),
                };
                let train: Vec<usize> = train_pos.into_iter().map(|p| indices[p]).collect();
                let test: Vec<usize> = test_pos.into_iter().map(|p| indices[p]).collect();
                Ok((stat, train, test))
            })
            .collect::<Result<Vec<_>>>()
    })?;

    let mut train = Vec::with_capacity(records.len());
    let mut test = Vec::new();
    let mut band_stats = Vec::with_capacity(per_band.len());
    for (stat, band_train, band_test) in per_band {
        tracing::debug!(
            "band {}: {} records, {} to test",
            stat.value,
            stat.total,
            stat.test
        );
        band_stats.push(stat);
        train.extend(band_train);
        test.extend(band_test);
    }

    train.sort_unstable();
    test.sort_unstable();

    Ok(Partition {
        train,
        test,
        bands: band_stats,
    })
}
