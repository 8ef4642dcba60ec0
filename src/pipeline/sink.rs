//! Output table contract
//!
//! Persistence is owned by external collaborators (a relational database in
//! the original deployment). The engine only requires replace semantics:
//! each run's output fully replaces prior output under the same table name,
//! and nothing is written unless the whole run succeeded.

use rustc_hash::FxHashMap;

use crate::errors::Result;
use crate::types::RatingRecord;

/// Table name for the full filtered record set.
pub const FILTERED_TABLE: &str = "ratings";
/// Table name for the train partition.
pub const TRAIN_TABLE: &str = "ratings_train";
/// Table name for the test partition.
pub const TEST_TABLE: &str = "ratings_test";

/// A destination for named record sets.
///
/// Implementations convert their own failures via
/// [`SplitError::sink`](crate::SplitError::sink).
pub trait TableSink {
    /// Replace the contents of `table` with `records`, dropping any prior
    /// contents under that name.
    fn replace(&mut self, table: &str, records: &[RatingRecord]) -> Result<()>;
}

/// In-memory sink, used in tests and small in-process pipelines.
#[derive(Debug, Default)]
pub struct MemorySink {
    tables: FxHashMap<String, Vec<RatingRecord>>,
}

impl MemorySink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a table's records, if the table was written
    pub fn get(&self, table: &str) -> Option<&[RatingRecord]> {
        self.tables.get(table).map(|v| v.as_slice())
    }

    /// Number of tables written
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Check if no table was written
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl TableSink for MemorySink {
    fn replace(&mut self, table: &str, records: &[RatingRecord]) -> Result<()> {
        self.tables.insert(table.to_string(), records.to_vec());
        Ok(())
    }
}
