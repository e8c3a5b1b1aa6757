//! Confusion-matrix classification metrics.
//!
//! Two unit conventions live side by side on the dashboard and both are part
//! of the contract: [`ConfusionCounts::metrics`] returns fractions in
//! `[0, 1]`, while [`detection_rate`] and [`false_positive_rate`] return
//! percentages in `[0, 100]`.
//!
//! Every metric uses guarded division: a zero denominator yields 0 rather
//! than NaN or an error, so a dashboard never renders an undefined value.

use serde::{Deserialize, Serialize};

/// Outcome counts for one binary-classifier evaluation period
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConfusionCounts {
    pub true_positive: u64,
    pub false_positive: u64,
    pub true_negative: u64,
    pub false_negative: u64,
}

/// Quality metrics derived from a confusion matrix, each in `[0, 1]` and
/// rounded to 2 decimals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassificationMetrics {
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
    pub accuracy: f64,
}

impl ConfusionCounts {
    pub fn new(
        true_positive: u64,
        false_positive: u64,
        true_negative: u64,
        false_negative: u64,
    ) -> Self {
        Self {
            true_positive,
            false_positive,
            true_negative,
            false_negative,
        }
    }

    /// Derive precision, recall, F1 and accuracy.
    ///
    /// F1 is computed from the unrounded precision and recall; rounding to
    /// 2 decimals happens once, on the way out. An all-zero matrix yields
    /// all-zero metrics.
    pub fn metrics(&self) -> ClassificationMetrics {
        let tp = self.true_positive as f64;
        let fp = self.false_positive as f64;
        let tn = self.true_negative as f64;
        let fn_ = self.false_negative as f64;

        let precision = guarded_div(tp, tp + fp);
        let recall = guarded_div(tp, tp + fn_);
        let f1_score = guarded_div(2.0 * precision * recall, precision + recall);
        let accuracy = guarded_div(tp + tn, tp + fp + tn + fn_);

        ClassificationMetrics {
            precision: round2(precision),
            recall: round2(recall),
            f1_score: round2(f1_score),
            accuracy: round2(accuracy),
        }
    }
}

/// Share of actual fraud the model caught, as a percentage of `[0, 100]`
pub fn detection_rate(true_positives: u64, false_negatives: u64) -> f64 {
    let total = (true_positives + false_negatives) as f64;
    guarded_div(true_positives as f64, total) * 100.0
}

/// Share of legitimate activity flagged by mistake, as a percentage of
/// `[0, 100]`
pub fn false_positive_rate(false_positives: u64, true_negatives: u64) -> f64 {
    let total = (false_positives + true_negatives) as f64;
    guarded_div(false_positives as f64, total) * 100.0
}

fn guarded_div(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guarded_div_substitutes_zero() {
        assert_eq!(guarded_div(5.0, 0.0), 0.0);
        assert_eq!(guarded_div(0.0, 0.0), 0.0);
        assert_eq!(guarded_div(1.0, 4.0), 0.25);
    }

    #[test]
    fn all_zero_matrix_yields_all_zero_metrics() {
        let metrics = ConfusionCounts::default().metrics();
        assert_eq!(metrics.precision, 0.0);
        assert_eq!(metrics.recall, 0.0);
        assert_eq!(metrics.f1_score, 0.0);
        assert_eq!(metrics.accuracy, 0.0);
    }

    #[test]
    fn rates_use_percent_units() {
        assert_eq!(detection_rate(80, 20), 80.0);
        assert_eq!(false_positive_rate(5, 95), 5.0);
        assert_eq!(detection_rate(0, 0), 0.0);
        assert_eq!(false_positive_rate(0, 0), 0.0);
    }
}
