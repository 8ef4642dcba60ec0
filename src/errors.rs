//! Error types for rating-split
//!
//! All failures surface to the immediate caller; the engine is a pure
//! computation and performs no retries and no partial-success reporting.

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SplitError>;

/// Main error type for rating-split
#[derive(Error, Debug, Clone)]
pub enum SplitError {
    /// Input dataset contains no records
    #[error("Empty dataset: {message}")]
    EmptyDataset { message: String },

    /// No item survived the popularity threshold filter
    #[error("Empty inclusion set: no item has more than {threshold} ratings")]
    EmptyInclusionSet { threshold: i64 },

    /// Popularity threshold is negative
    #[error("Invalid threshold: {value} (must be >= 0)")]
    InvalidThreshold { value: i64 },

    /// Test fraction outside the open interval (0, 1)
    #[error("Invalid test fraction: {value} (must be in (0, 1))")]
    InvalidFraction { value: f64 },

    /// Configuration validation failed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// A table sink collaborator failed to persist an output
    #[error("Sink error: {message}")]
    Sink { message: String },

    /// Internal invariant violation (should not occur in normal usage)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl SplitError {
    /// Create an empty dataset error
    pub fn empty_dataset(message: impl Into<String>) -> Self {
        Self::EmptyDataset {
            message: message.into(),
        }
    }

    /// Create an empty inclusion set error
    pub fn empty_inclusion_set(threshold: i64) -> Self {
        Self::EmptyInclusionSet { threshold }
    }

    /// Create an invalid threshold error
    pub fn invalid_threshold(value: i64) -> Self {
        Self::InvalidThreshold { value }
    }

    /// Create an invalid fraction error
    pub fn invalid_fraction(value: f64) -> Self {
        Self::InvalidFraction { value }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Create a sink error
    pub fn sink(message: impl Into<String>) -> Self {
        Self::Sink {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Check if this error is an input validation failure
    /// (as opposed to an internal invariant violation)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyDataset { .. }
                | Self::EmptyInclusionSet { .. }
                | Self::InvalidThreshold { .. }
                | Self::InvalidFraction { .. }
                | Self::InvalidConfig { .. }
        )
    }
}

impl From<serde_json::Error> for SplitError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}
