//! Shared error types for the crate

use thiserror::Error;

/// Structural input failures.
///
/// Only distribution-shape problems are errors; every metric computed from
/// counts uses guarded division and never fails (see the classification and
/// trend modules).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The actual and expected distributions have different bucket counts
    #[error("distribution length mismatch: actual has {actual} buckets, expected has {expected}")]
    DistributionMismatch { actual: usize, expected: usize },

    /// A distribution was empty
    #[error("distribution must contain at least one bucket")]
    EmptyDistribution,
}

/// Result type alias for analytics operations
pub type Result<T> = std::result::Result<T, Error>;
