//! # rating-split
//!
//! Deterministic dataset preparation for recommender models: a popularity
//! threshold filter plus a rating-value-stratified train/test split.
//!
//! The engine is a pure transformation from a ratings dataset to three named
//! record sets (`filtered_all`, `train`, `test`). Storage, CSV ingestion, and
//! distributed execution live outside this crate and are modeled as injected
//! collaborators.
//!
//! ## Features
//!
//! - **Reproducible**: a fixed seed gives bit-for-bit identical partitions
//!   across runs
//! - **Stratified**: each distinct rating value keeps its proportional
//!   representation in train and test, with epsilon banding instead of
//!   fragile floating-point equality
//! - **Parallel-safe**: rating bands split independently; thread count never
//!   changes the result
//!
//! ## Example
//!
//! ```
//! use rating_split::{RatingRecord, Runner, SplitConfig};
//!
//! let records: Vec<RatingRecord> = (0..100)
//!     .map(|u| RatingRecord::new(u, 1, 4.0))
//!     .collect();
//!
//! let runner = Runner::new(SplitConfig::new(20));
//! let output = runner.run(&records).unwrap();
//!
//! assert_eq!(output.train.len(), 80);
//! assert_eq!(output.test.len(), 20);
//! ```

pub mod bands;
pub mod errors;
pub mod pipeline;
pub mod popularity;
pub mod sampling;
pub mod splitter;
pub mod types;

// Re-export commonly used types
pub use errors::{Result, SplitError};
pub use types::{ItemStats, RatingRecord, Runtime, SplitConfig, SplitMode};

// Re-export main functionality
pub use pipeline::{
    MemorySink, Runner, SplitOutput, SplitReport, TableSink, FILTERED_TABLE, TEST_TABLE,
    TRAIN_TABLE,
};
pub use popularity::{filter_items, item_stats, restrict};
pub use sampling::{seeded_partition, stratified_partition};
pub use splitter::{split, split_records, BandStat, Partition};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
