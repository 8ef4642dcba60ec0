//! Seeded random partitioning primitives
//!
//! The building block for both split modes: a deterministic shuffle-and-cut
//! over positions, and a generic stratified variant that applies the cut per
//! label group. Callers validate fractions; these functions assume
//! `0 < test_frac < 1`.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Randomly partition positions `0..n` into (train, test).
///
/// The RNG derives from `seed` alone, so the result is reproducible across
/// runs and independent of any surrounding execution order. The test side
/// receives exactly `round(n * test_frac)` positions (clamped to `n`), so a
/// single position is never dropped or duplicated. Both sides are returned
/// in ascending position order.
pub fn seeded_partition(n: usize, test_frac: f64, seed: u64) -> (Vec<usize>, Vec<usize>) {
    let mut positions: Vec<usize> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    positions.shuffle(&mut rng);

    let n_test = ((n as f64) * test_frac).round() as usize;
    let n_test = n_test.min(n);

    let mut test = positions[..n_test].to_vec();
    let mut train = positions[n_test..].to_vec();
    train.sort_unstable();
    test.sort_unstable();
    (train, test)
}

/// Stratified partition: split positions `0..labels.len()` into (train, test)
/// such that each distinct label keeps its proportional representation.
///
/// Groups positions by label, applies [`seeded_partition`] within each group
/// (reusing the same seed per group), and merges the group results in label
/// order. The merge is order-independent, so groups could be evaluated in
/// parallel or on a distributed backend without changing the outcome.
pub fn stratified_partition<K: Ord>(
    labels: &[K],
    test_frac: f64,
    seed: u64,
) -> (Vec<usize>, Vec<usize>) {
    let mut groups: BTreeMap<&K, Vec<usize>> = BTreeMap::new();
    for (i, label) in labels.iter().enumerate() {
        groups.entry(label).or_default().push(i);
    }

    let mut train = Vec::new();
    let mut test = Vec::new();
    for indices in groups.into_values() {
        let (group_train, group_test) = seeded_partition(indices.len(), test_frac, seed);
        train.extend(group_train.into_iter().map(|p| indices[p]));
        test.extend(group_test.into_iter().map(|p| indices[p]));
    }

    train.sort_unstable();
    test.sort_unstable();
    (train, test)
}
