//! Rating-value banding
//!
//! Rating values come from a small discrete scale (half-star increments) but
//! arrive as floating point, so exact equality is unsafe for grouping.
//! Instead the engine enumerates distinct representative values and assigns
//! each record to the band of the representative within `epsilon` of its
//! rating. When tolerance windows of adjacent representatives overlap, the
//! nearest representative wins, with ties resolved toward the lower value —
//! every record lands in exactly one band.

use crate::types::RatingRecord;

/// Enumerate the distinct rating values present, in ascending order.
///
/// Values within `epsilon` of an already-chosen representative collapse into
/// it, so two representatives always differ by more than `epsilon`.
pub fn band_values(records: &[RatingRecord], epsilon: f64) -> Vec<f64> {
    let mut values: Vec<f64> = records.iter().map(|r| r.rating).collect();
    values.sort_by(f64::total_cmp);

    let mut reps: Vec<f64> = Vec::new();
    for v in values {
        match reps.last() {
            Some(&last) if v - last <= epsilon => {}
            _ => reps.push(v),
        }
    }
    reps
}

/// Assign a rating to the band of its nearest representative.
///
/// `reps` must be non-empty and ascending (as produced by [`band_values`]).
/// Equidistant ratings go to the lower representative.
pub fn assign(rating: f64, reps: &[f64]) -> usize {
    debug_assert!(!reps.is_empty());

    let idx = reps.partition_point(|&r| r < rating);
    if idx == 0 {
        return 0;
    }
    if idx == reps.len() {
        return reps.len() - 1;
    }

    let left = reps[idx - 1];
    let right = reps[idx];
    if rating - left <= right - rating {
        idx - 1
    } else {
        idx
    }
}

/// Group record indices by rating band, in ascending representative order.
///
/// Returns `(representative, record indices)` pairs. The grouping is fully
/// deterministic: representative order comes from sorting, never from float
/// hashing, and indices within a band keep input order.
pub fn group_by_band(records: &[RatingRecord], epsilon: f64) -> Vec<(f64, Vec<usize>)> {
    let reps = band_values(records, epsilon);
    if reps.is_empty() {
        return Vec::new();
    }

    let mut groups: Vec<(f64, Vec<usize>)> = reps.iter().map(|&r| (r, Vec::new())).collect();
    for (i, rec) in records.iter().enumerate() {
        let band = assign(rec.rating, &reps);
        groups[band].1.push(i);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records_with_ratings(ratings: &[f64]) -> Vec<RatingRecord> {
        ratings
            .iter()
            .enumerate()
            .map(|(i, &r)| RatingRecord::new(i as i64, 1, r))
            .collect()
    }

    #[test]
    fn test_band_values_half_star_scale() {
        let records = records_with_ratings(&[4.0, 0.5, 3.5, 4.0, 0.5, 5.0]);
        let reps = band_values(&records, 0.01);
        assert_eq!(reps, vec![0.5, 3.5, 4.0, 5.0]);
    }

    #[test]
    fn test_band_values_collapses_representation_error() {
        // 3.0 computed two different ways should land in one band.
        let noisy = 0.1 + 0.2 + 2.7; // not bit-identical to 3.0
        let records = records_with_ratings(&[3.0, noisy, 4.0]);
        let reps = band_values(&records, 0.01);
        assert_eq!(reps.len(), 2);
        assert_eq!(reps[0], 3.0);
        assert_eq!(reps[1], 4.0);
    }

    #[test]
    fn test_band_values_empty() {
        assert!(band_values(&[], 0.01).is_empty());
    }

    #[test]
    fn test_assign_exact_and_boundary() {
        let reps = [0.5, 3.5, 4.0, 5.0];
        assert_eq!(assign(0.5, &reps), 0);
        assert_eq!(assign(4.0, &reps), 2);
        // Below the lowest and above the highest clamp to the ends.
        assert_eq!(assign(0.1, &reps), 0);
        assert_eq!(assign(5.4, &reps), 3);
    }

    #[test]
    fn test_assign_nearest_wins_ties_go_lower() {
        let reps = [3.0, 4.0];
        assert_eq!(assign(3.4, &reps), 0);
        assert_eq!(assign(3.6, &reps), 1);
        // Exactly equidistant → lower representative
        assert_eq!(assign(3.5, &reps), 0);
    }

    #[test]
    fn test_group_by_band_partitions_all_records() {
        let records = records_with_ratings(&[4.0, 3.5, 4.0, 0.5, 3.5, 4.0]);
        let groups = group_by_band(&records, 0.01);

        assert_eq!(groups.len(), 3);
        let total: usize = groups.iter().map(|(_, idx)| idx.len()).sum();
        assert_eq!(total, records.len());

        // Ascending representative order with input-ordered indices
        assert_eq!(groups[0].0, 0.5);
        assert_eq!(groups[0].1, vec![3]);
        assert_eq!(groups[1].0, 3.5);
        assert_eq!(groups[1].1, vec![1, 4]);
        assert_eq!(groups[2].0, 4.0);
        assert_eq!(groups[2].1, vec![0, 2, 5]);
    }

    #[test]
    fn test_group_by_band_overlapping_windows() {
        // 3.0 and 3.015 are distinct representatives with 0.01 tolerance;
        // 3.007 sits inside both windows and must land in exactly one band
        // (the nearer one).
        let records = records_with_ratings(&[3.0, 3.015, 3.007]);
        let groups = group_by_band(&records, 0.01);

        assert_eq!(groups.len(), 2);
        let total: usize = groups.iter().map(|(_, idx)| idx.len()).sum();
        assert_eq!(total, 3);
        // |3.007 - 3.0| = 0.007 < |3.015 - 3.007| = 0.008, so band 0 wins.
        assert_eq!(groups[0].1, vec![0, 2]);
        assert_eq!(groups[1].1, vec![1]);
    }
}
