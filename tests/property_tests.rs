//! Property-based tests using proptest

use proptest::prelude::*;
use rating_split::*;

/// Datasets of 1..200 records on the half-star rating scale, with unique
/// (user, movie) pairs (user ids are positional).
fn arb_records() -> impl Strategy<Value = Vec<RatingRecord>> {
    prop::collection::vec((1i64..20, 0u8..10), 1..200).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (movie, step))| {
                RatingRecord::new(i as i64, movie, 0.5 + step as f64 * 0.5)
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn test_partition_complete_and_exclusive(
        records in arb_records(),
        frac in 0.05f64..0.95,
        seed in 0u64..1000
    ) {
        let config = SplitConfig::new(0).with_test_frac(frac).with_seed(seed);
        let partition = split(&records, &config).unwrap();

        let mut all: Vec<usize> = partition
            .train
            .iter()
            .chain(partition.test.iter())
            .copied()
            .collect();
        all.sort_unstable();
        all.dedup();
        prop_assert_eq!(all.len(), records.len(), "records lost or duplicated");
        prop_assert_eq!(all, (0..records.len()).collect::<Vec<_>>());
    }

    #[test]
    fn test_partition_deterministic(
        records in arb_records(),
        frac in 0.05f64..0.95,
        seed in 0u64..1000
    ) {
        let config = SplitConfig::new(0).with_test_frac(frac).with_seed(seed);
        let a = split(&records, &config).unwrap();
        let b = split(&records, &config).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn test_modes_always_agree(
        records in arb_records(),
        frac in 0.05f64..0.95,
        seed in 0u64..1000
    ) {
        let banded = SplitConfig::new(0).with_test_frac(frac).with_seed(seed);
        let global = banded.clone().with_mode(SplitMode::Global);

        let a = split(&records, &banded).unwrap();
        let b = split(&records, &global).unwrap();
        prop_assert_eq!(a.train, b.train);
        prop_assert_eq!(a.test, b.test);
    }

    #[test]
    fn test_band_test_counts_are_rounded_exactly(
        records in arb_records(),
        frac in 0.05f64..0.95,
        seed in 0u64..1000
    ) {
        let config = SplitConfig::new(0).with_test_frac(frac).with_seed(seed);
        let partition = split(&records, &config).unwrap();

        for band in &partition.bands {
            let expected = ((band.total as f64) * frac).round() as usize;
            let expected = expected.min(band.total);
            prop_assert_eq!(
                band.test, expected,
                "band {} with {} records", band.value, band.total
            );
            // Well within the ±5pp tolerance for any band of 20+ records.
            if band.total >= 20 {
                let share = band.test as f64 / band.total as f64;
                prop_assert!((share - frac).abs() <= 0.05);
            }
        }
    }

    #[test]
    fn test_singleton_bands_never_lost(
        records in arb_records(),
        frac in 0.05f64..0.95,
        seed in 0u64..1000
    ) {
        let config = SplitConfig::new(0).with_test_frac(frac).with_seed(seed);
        let partition = split(&records, &config).unwrap();

        for band in &partition.bands {
            if band.total == 1 {
                prop_assert!(band.test <= 1);
            }
        }
        prop_assert_eq!(
            partition.train.len() + partition.test.len(),
            records.len()
        );
    }

    #[test]
    fn test_threshold_strictness(
        count in 1usize..50,
        thresh in 0i64..60
    ) {
        let records: Vec<RatingRecord> = (0..count)
            .map(|u| RatingRecord::new(u as i64, 1, 4.0))
            .collect();

        let inclusion = filter_items(&records, thresh).unwrap();
        if count as i64 > thresh {
            prop_assert!(inclusion.contains(&1));
        } else {
            prop_assert!(inclusion.is_empty());
        }
    }

    #[test]
    fn test_thread_count_never_changes_result(
        records in arb_records(),
        seed in 0u64..1000
    ) {
        let base = SplitConfig::new(0).with_seed(seed);
        let single = base.clone().with_runtime(Runtime {
            max_threads: None,
            single_thread: true,
        });
        let duo = base.clone().with_runtime(Runtime {
            max_threads: Some(2),
            single_thread: false,
        });

        let a = split(&records, &base).unwrap();
        let b = split(&records, &single).unwrap();
        let c = split(&records, &duo).unwrap();
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(&a, &c);
    }
}
