//! Popularity threshold filter
//!
//! Groups ratings by item, computes per-item counts and means, and retains
//! the identifiers of items whose rating count strictly exceeds a threshold.
//! Long-tail items with few ratings carry too little signal for collaborative
//! filtering, so they are dropped before the train/test split.
//!
//! The filter is read-only over its input and recomputes its summaries on
//! every run.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::errors::{Result, SplitError};
use crate::types::{ItemStats, RatingRecord};

/// Compute per-item rating counts and mean ratings.
///
/// Returns an error on an empty dataset; every other input is valid.
pub fn item_stats(records: &[RatingRecord]) -> Result<FxHashMap<i64, ItemStats>> {
    if records.is_empty() {
        return Err(SplitError::empty_dataset(
            "cannot compute item statistics over zero records",
        ));
    }

    let mut sums: FxHashMap<i64, (u64, f64)> = FxHashMap::default();
    for rec in records {
        let entry = sums.entry(rec.movie_id).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += rec.rating;
    }

    Ok(sums
        .into_iter()
        .map(|(movie_id, (count, sum))| {
            (
                movie_id,
                ItemStats {
                    count,
                    mean_rating: sum / count as f64,
                },
            )
        })
        .collect())
}

/// Derive the inclusion set from precomputed item statistics: item ids whose
/// rating count strictly exceeds `threshold`.
///
/// An item with exactly `threshold` ratings is excluded. Logs the fraction
/// of distinct items retained as a diagnostic.
pub fn inclusion_set(stats: &FxHashMap<i64, ItemStats>, threshold: i64) -> FxHashSet<i64> {
    debug_assert!(threshold >= 0, "callers validate the threshold");

    let included: FxHashSet<i64> = stats
        .iter()
        .filter(|(_, s)| s.count > threshold as u64)
        .map(|(&movie_id, _)| movie_id)
        .collect();

    tracing::info!(
        "{:.2}% of items have a rating count greater than {}",
        included.len() as f64 / stats.len() as f64 * 100.0,
        threshold
    );

    included
}

/// Return the inclusion set for a raw dataset: item ids whose rating count
/// strictly exceeds `threshold`.
pub fn filter_items(records: &[RatingRecord], threshold: i64) -> Result<FxHashSet<i64>> {
    if threshold < 0 {
        return Err(SplitError::invalid_threshold(threshold));
    }

    let stats = item_stats(records)?;
    Ok(inclusion_set(&stats, threshold))
}

/// Restrict the dataset to records whose item is in the inclusion set,
/// preserving input order.
pub fn restrict(records: &[RatingRecord], inclusion: &FxHashSet<i64>) -> Vec<RatingRecord> {
    records
        .iter()
        .filter(|r| inclusion.contains(&r.movie_id))
        .cloned()
        .collect()
}
