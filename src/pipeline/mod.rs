//! Pipeline composition and output contracts.
//!
//! ## Submodules
//!
//! - [`artifacts`] — Typed run outputs (record sets, accounting report)
//! - [`sink`] — Output table contract and in-memory implementation
//! - [`runner`] — Filter + split orchestration

pub mod artifacts;
pub mod runner;
pub mod sink;

// Re-export the pipeline surface for convenient access.
pub use artifacts::{SplitOutput, SplitReport};
pub use runner::Runner;
pub use sink::{MemorySink, TableSink, FILTERED_TABLE, TEST_TABLE, TRAIN_TABLE};
