//! Run orchestration
//!
//! Composes the popularity filter and the stratified splitter over a raw
//! dataset: validate → item stats → inclusion set → restrict → split →
//! report. Collaborators (record source, table sink) are injected as
//! parameters; the runner holds no ambient connections and no mutable state
//! across runs.

use crate::errors::{Result, SplitError};
use crate::pipeline::artifacts::{SplitOutput, SplitReport};
use crate::pipeline::sink::{TableSink, FILTERED_TABLE, TEST_TABLE, TRAIN_TABLE};
use crate::popularity;
use crate::splitter;
use crate::types::{RatingRecord, SplitConfig};

/// Runs the full filter + split pipeline for one configuration.
#[derive(Debug, Clone)]
pub struct Runner {
    config: SplitConfig,
}

impl Runner {
    /// Create a runner for the given configuration
    pub fn new(config: SplitConfig) -> Self {
        Self { config }
    }

    /// The runner's configuration
    pub fn config(&self) -> &SplitConfig {
        &self.config
    }

    /// Execute the pipeline over `records`.
    ///
    /// Fails fast on invalid configuration, an empty dataset, or an empty
    /// inclusion set; otherwise returns the complete, invariant-respecting
    /// output. The input is never mutated.
    pub fn run(&self, records: &[RatingRecord]) -> Result<SplitOutput> {
        self.config.validate()?;

        let stats = popularity::item_stats(records)?;
        let items_total = stats.len();

        let inclusion = popularity::inclusion_set(&stats, self.config.movie_thresh);
        if inclusion.is_empty() {
            return Err(SplitError::empty_inclusion_set(self.config.movie_thresh));
        }

        let filtered = popularity::restrict(records, &inclusion);
        let partition = splitter::split(&filtered, &self.config)?;

        let report = SplitReport {
            items_total,
            items_retained: inclusion.len(),
            records_total: records.len(),
            records_retained: filtered.len(),
            train_count: partition.train.len(),
            test_count: partition.test.len(),
            bands: partition.bands,
        };

        let train = partition
            .train
            .iter()
            .map(|&i| filtered[i].clone())
            .collect();
        let test = partition
            .test
            .iter()
            .map(|&i| filtered[i].clone())
            .collect();

        Ok(SplitOutput {
            filtered,
            train,
            test,
            report,
        })
    }

    /// Execute the pipeline and hand the three output tables to `sink`.
    ///
    /// The sink is only invoked after the full split succeeded, so an
    /// interrupted or failed run leaves no partial external effect.
    pub fn run_into(
        &self,
        records: &[RatingRecord],
        sink: &mut impl TableSink,
    ) -> Result<SplitOutput> {
        let output = self.run(records)?;
        sink.replace(FILTERED_TABLE, &output.filtered)?;
        sink.replace(TRAIN_TABLE, &output.train)?;
        sink.replace(TEST_TABLE, &output.test)?;
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::sink::MemorySink;

    /// `n` ratings of `rating` for `movie_id`, one per synthetic user
    fn ratings_for(movie_id: i64, n: usize, rating: f64) -> Vec<RatingRecord> {
        (0..n)
            .map(|u| RatingRecord::new(movie_id * 10_000 + u as i64, movie_id, rating))
            .collect()
    }

    #[test]
    fn test_run_filters_then_splits() {
        let mut records = ratings_for(1, 25, 4.0);
        records.extend(ratings_for(2, 15, 3.0));

        let runner = Runner::new(SplitConfig::new(20));
        let output = runner.run(&records).unwrap();

        // Item 2 fell below the threshold
        assert!(output.filtered.iter().all(|r| r.movie_id == 1));
        assert_eq!(output.report.items_total, 2);
        assert_eq!(output.report.items_retained, 1);
        assert_eq!(output.report.records_total, 40);
        assert_eq!(output.report.records_retained, 25);
        assert_eq!(
            output.report.train_count + output.report.test_count,
            output.report.records_retained
        );
    }

    #[test]
    fn test_run_empty_dataset() {
        let runner = Runner::new(SplitConfig::new(0));
        assert!(matches!(
            runner.run(&[]),
            Err(SplitError::EmptyDataset { .. })
        ));
    }

    #[test]
    fn test_run_empty_inclusion_set() {
        let records = ratings_for(1, 5, 4.0);
        let runner = Runner::new(SplitConfig::new(100));
        assert!(matches!(
            runner.run(&records),
            Err(SplitError::EmptyInclusionSet { threshold: 100 })
        ));
    }

    #[test]
    fn test_run_invalid_config_rejected_before_work() {
        let records = ratings_for(1, 5, 4.0);
        let runner = Runner::new(SplitConfig::new(0).with_test_frac(2.0));
        assert!(matches!(
            runner.run(&records),
            Err(SplitError::InvalidFraction { .. })
        ));
    }

    #[test]
    fn test_run_into_writes_three_tables() {
        let records = ratings_for(1, 50, 4.0);
        let runner = Runner::new(SplitConfig::new(10));
        let mut sink = MemorySink::new();

        let output = runner.run_into(&records, &mut sink).unwrap();

        assert_eq!(sink.len(), 3);
        assert_eq!(sink.get(FILTERED_TABLE).unwrap().len(), 50);
        assert_eq!(
            sink.get(TRAIN_TABLE).unwrap().len(),
            output.report.train_count
        );
        assert_eq!(
            sink.get(TEST_TABLE).unwrap().len(),
            output.report.test_count
        );
    }

    #[test]
    fn test_run_into_failed_run_writes_nothing() {
        let records = ratings_for(1, 5, 4.0);
        let runner = Runner::new(SplitConfig::new(100));
        let mut sink = MemorySink::new();

        assert!(runner.run_into(&records, &mut sink).is_err());
        assert!(sink.is_empty());
    }

    #[test]
    fn test_run_deterministic() {
        let mut records = ratings_for(1, 60, 4.0);
        records.extend(ratings_for(2, 40, 3.5));

        let runner = Runner::new(SplitConfig::new(10));
        let a = runner.run(&records).unwrap();
        let b = runner.run(&records).unwrap();
        assert_eq!(a, b);
    }
}
