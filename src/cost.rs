//! Monetary impact of classification outcomes.
//!
//! Costs are computed on demand from whatever precision/recall figures the
//! caller currently holds; nothing is precomputed or cached at load time, so
//! there is no hidden ordering between refreshing model metrics and
//! refreshing cost figures.

use serde::{Deserialize, Serialize};

/// Fixed normalization constant: the daily miss rate is applied to a nominal
/// batch of 100 underlying fraud cases. A modeling convention of the
/// reference dashboard, not a quantity derived from alert volume.
const NOMINAL_DAILY_FRAUD_CASES: f64 = 100.0;

/// Unit costs for analyst review and missed fraud
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostParameters {
    pub review_cost_per_alert: f64,
    pub fraud_cost_per_miss: f64,
}

impl Default for CostParameters {
    /// The reference dashboard's constants: 50 per reviewed alert, 5000 per
    /// missed fraud case
    fn default() -> Self {
        Self {
            review_cost_per_alert: 50.0,
            fraud_cost_per_miss: 5000.0,
        }
    }
}

/// Estimated daily operating cost of a model at a given alert volume.
///
/// Review cost scales with the true alerts analysts handle
/// (`alert_volume * precision`); miss cost scales with the recall shortfall
/// over the nominal daily fraud batch.
pub fn estimate_daily_cost(
    alert_volume: f64,
    precision: f64,
    recall: f64,
    params: &CostParameters,
) -> f64 {
    let review_cost = alert_volume * precision * params.review_cost_per_alert;
    let miss_cost = (1.0 - recall) * NOMINAL_DAILY_FRAUD_CASES * params.fraud_cost_per_miss;
    review_cost + miss_cost
}

/// Projected annual savings of the current model over a baseline, rounded to
/// the nearest whole unit.
///
/// Negative results are meaningful and pass through unclamped: the current
/// model costs more than the baseline.
pub fn annual_savings(baseline_daily_cost: f64, current_daily_cost: f64) -> f64 {
    ((baseline_daily_cost - current_daily_cost) * 365.0).round()
}

/// Direct cost of classification errors in one period: wasted reviews plus
/// missed fraud
pub fn review_error_cost(
    false_positives: u64,
    false_negatives: u64,
    params: &CostParameters,
) -> f64 {
    false_positives as f64 * params.review_cost_per_alert
        + false_negatives as f64 * params.fraud_cost_per_miss
}
