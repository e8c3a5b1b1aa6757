//! Population drift detection via the Population Stability Index.
//!
//! PSI compares the bucketed distribution a model sees in production
//! (`actual`) against the distribution it was trained or validated on
//! (`expected`). Values near zero mean the population is stable; values at
//! or above the review threshold mean the feature or score has shifted
//! enough to warrant attention.

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// Review threshold used by the reference dashboard
pub const DEFAULT_PSI_THRESHOLD: f64 = 0.25;

/// A PSI reading compared against a review threshold.
///
/// Only the threshold comparison is modeled here. Finer display bands (a
/// "monitor" middle zone, per-feature coloring) are presentation policy and
/// belong to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DriftAssessment {
    pub psi: f64,
    pub threshold: f64,
    pub exceeds_threshold: bool,
}

/// Compute the Population Stability Index between two bucketed distributions.
///
/// Each slice holds the proportion of the population falling into bucket
/// `i`; the slices must be the same length and non-empty. Buckets where
/// either side is zero or negative contribute nothing — skipping them keeps
/// `ln` away from non-positive arguments and is part of the contract, not an
/// implementation shortcut. Returns the absolute value of the accumulated
/// index.
///
/// # Errors
///
/// `Error::EmptyDistribution` when either slice is empty, and
/// `Error::DistributionMismatch` when the lengths differ. A mismatch means
/// the caller binned the two populations differently, which is a bug rather
/// than a benign edge case.
pub fn compute_psi(actual: &[f64], expected: &[f64]) -> Result<f64> {
    if actual.is_empty() || expected.is_empty() {
        log::debug!("rejecting PSI computation over an empty distribution");
        return Err(Error::EmptyDistribution);
    }
    if actual.len() != expected.len() {
        log::debug!(
            "rejecting PSI computation: {} actual buckets vs {} expected",
            actual.len(),
            expected.len()
        );
        return Err(Error::DistributionMismatch {
            actual: actual.len(),
            expected: expected.len(),
        });
    }

    let psi: f64 = actual
        .iter()
        .zip(expected.iter())
        .filter(|(a, e)| **a > 0.0 && **e > 0.0)
        .map(|(a, e)| (a - e) * (a / e).ln())
        .sum();

    Ok(psi.abs())
}

/// Compare a PSI reading against a review threshold.
///
/// `exceeds_threshold` is true when `psi >= threshold`, matching the
/// dashboard convention that the threshold itself already requires review.
pub fn classify_stability(psi: f64, threshold: f64) -> DriftAssessment {
    DriftAssessment {
        psi,
        threshold,
        exceeds_threshold: psi >= threshold,
    }
}
