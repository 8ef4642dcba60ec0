//! Core types for rating-split
//!
//! This module defines the fundamental data structures used throughout the
//! library: rating records, per-item popularity summaries, and the split
//! configuration.

use crate::errors::{Result, SplitError};
use serde::{Deserialize, Serialize};

// ============================================================================
// Rating Record
// ============================================================================

/// A single rating event: one user rated one item once.
///
/// Field names follow the canonical MovieLens CSV header
/// (`userId,movieId,rating,timestamp`), so a record deserializes directly
/// from upstream rows without a mapping layer.
///
/// Records are immutable once read; the engine never mutates its input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingRecord {
    /// Identifier of the rating user.
    #[serde(rename = "userId")]
    pub user_id: i64,

    /// Identifier of the rated item.
    #[serde(rename = "movieId")]
    pub movie_id: i64,

    /// Rating value. Drawn from a small discrete set (half-star increments)
    /// but represented as floating point, so grouping must tolerate
    /// representation error — see [`crate::bands`].
    pub rating: f64,

    /// Seconds-since-epoch timestamp of the rating, when the source has one.
    #[serde(default)]
    pub timestamp: Option<i64>,
}

impl RatingRecord {
    /// Create a record without a timestamp
    pub fn new(user_id: i64, movie_id: i64, rating: f64) -> Self {
        Self {
            user_id,
            movie_id,
            rating,
            timestamp: None,
        }
    }

    /// Create a record with a timestamp
    pub fn with_timestamp(user_id: i64, movie_id: i64, rating: f64, timestamp: i64) -> Self {
        Self {
            user_id,
            movie_id,
            rating,
            timestamp: Some(timestamp),
        }
    }
}

// ============================================================================
// Item Popularity Summary
// ============================================================================

/// Per-item aggregate derived from the raw dataset: how many ratings an item
/// received and their arithmetic mean.
///
/// Recomputed on every run and never persisted independently of the filter
/// output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemStats {
    /// Number of ratings the item received.
    pub count: u64,
    /// Mean rating value across those ratings.
    pub mean_rating: f64,
}

// ============================================================================
// Split Mode
// ============================================================================

/// Which splitting algorithm to run.
///
/// Both modes give the same guarantee — proportional representation of each
/// rating band in train and test, seed-deterministic, complete and exclusive
/// — they differ only in how the stratification is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitMode {
    /// Enumerate rating bands explicitly and split each band independently.
    #[default]
    Banded,
    /// One call to the generic stratified sampling primitive with the band
    /// index as the stratification label.
    Global,
}

// ============================================================================
// Runtime
// ============================================================================

/// Threading controls for the per-band split work.
///
/// Band-local RNGs derive from the configured seed alone, so results are
/// identical regardless of thread count or scheduling.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Runtime {
    /// Maximum number of Rayon threads for parallel band processing.
    /// `None` uses Rayon's default (all logical cores).
    #[serde(default)]
    pub max_threads: Option<usize>,

    /// Disable parallelism entirely (equivalent to `max_threads: 1`).
    /// When `true`, overrides `max_threads`.
    #[serde(default)]
    pub single_thread: bool,
}

impl Runtime {
    /// Resolve the effective thread count.
    ///
    /// - `single_thread == true` → `Some(1)`
    /// - `max_threads == Some(n)` → `Some(n)`
    /// - otherwise → `None` (use Rayon default)
    pub fn effective_threads(&self) -> Option<usize> {
        if self.single_thread {
            Some(1)
        } else {
            self.max_threads
        }
    }

    /// Build a scoped Rayon thread pool matching this config.
    ///
    /// Returns `None` when no thread limit is set (use global pool).
    pub fn build_thread_pool(&self) -> Option<rayon::ThreadPool> {
        self.effective_threads().map(|n| {
            rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .expect("failed to build Rayon thread pool")
        })
    }

    /// Execute `f` within a scoped Rayon thread pool matching this config.
    ///
    /// If no thread limit is set, `f` runs directly (using the global pool).
    /// Otherwise a custom pool is created and `f` runs inside
    /// [`rayon::ThreadPool::install`], so any `par_iter()` within `f`
    /// uses the scoped pool.
    pub fn scoped<R: Send>(&self, f: impl FnOnce() -> R + Send) -> R {
        match self.build_thread_pool() {
            Some(pool) => pool.install(f),
            None => f(),
        }
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for the filter + split run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitConfig {
    /// Minimum rating count an item must exceed to be retained.
    /// The predicate is strict: an item with exactly this many ratings
    /// is excluded.
    pub movie_thresh: i64,

    /// Fraction of each rating band routed to the test set, in (0, 1)
    #[serde(default = "default_test_frac")]
    pub test_frac: f64,

    /// Reproducibility key. The same seed value is reused for every band
    /// split, matching the behavior of the original pipeline.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Rating-value banding tolerance. Two rating values closer than this
    /// belong to the same stratification band.
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,

    /// Splitting algorithm (banded loop or generic stratified sampling)
    #[serde(default)]
    pub mode: SplitMode,

    /// Threading controls
    #[serde(default)]
    pub runtime: Runtime,
}

fn default_test_frac() -> f64 {
    0.2
}

fn default_seed() -> u64 {
    42
}

fn default_epsilon() -> f64 {
    0.01
}

impl SplitConfig {
    /// Create a config with the given popularity threshold and default
    /// values everywhere else
    pub fn new(movie_thresh: i64) -> Self {
        Self {
            movie_thresh,
            test_frac: default_test_frac(),
            seed: default_seed(),
            epsilon: default_epsilon(),
            mode: SplitMode::default(),
            runtime: Runtime::default(),
        }
    }

    /// Parse a config from its JSON representation
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.movie_thresh < 0 {
            return Err(SplitError::invalid_threshold(self.movie_thresh));
        }

        if !(self.test_frac > 0.0 && self.test_frac < 1.0) {
            return Err(SplitError::invalid_fraction(self.test_frac));
        }

        if !(self.epsilon > 0.0) {
            return Err(SplitError::invalid_config(format!(
                "epsilon must be > 0, got {}",
                self.epsilon
            )));
        }

        // Half-star scales have a 0.5 gap between adjacent values; an
        // epsilon of 0.25 or more would merge adjacent bands.
        if self.epsilon >= 0.25 {
            return Err(SplitError::invalid_config(format!(
                "epsilon must be < 0.25 to keep rating bands distinct, got {}",
                self.epsilon
            )));
        }

        Ok(())
    }

    /// Builder method: set test fraction
    pub fn with_test_frac(mut self, test_frac: f64) -> Self {
        self.test_frac = test_frac;
        self
    }

    /// Builder method: set seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Builder method: set banding tolerance
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Builder method: set split mode
    pub fn with_mode(mut self, mode: SplitMode) -> Self {
        self.mode = mode;
        self
    }

    /// Builder method: set threading controls
    pub fn with_runtime(mut self, runtime: Runtime) -> Self {
        self.runtime = runtime;
        self
    }
}
