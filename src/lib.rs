//! Quantitative analytics core for AML model-operations dashboards.
//!
//! Everything here is a pure, synchronous function over plain value records:
//! onboarding risk scoring, population-drift (PSI) detection,
//! confusion-matrix quality metrics, business-cost estimation, and KPI trend
//! analysis. The crate owns no state, performs no I/O, and may be called
//! concurrently without coordination; the surrounding dashboard owns data
//! collection, refresh timers, and all rendering and formatting.

// Export modules for library usage
pub mod classification;
pub mod cost;
pub mod drift;
pub mod errors;
pub mod risk;
pub mod testkit;
pub mod trend;

// Re-export commonly used types
pub use crate::classification::{
    detection_rate, false_positive_rate, ClassificationMetrics, ConfusionCounts,
};
pub use crate::cost::{annual_savings, estimate_daily_cost, review_error_cost, CostParameters};
pub use crate::drift::{
    classify_stability, compute_psi, DriftAssessment, DEFAULT_PSI_THRESHOLD,
};
pub use crate::errors::{Error, Result};
pub use crate::risk::{
    alert_severity, assess_onboarding, classify_risk_level, decision_for_level, score_onboarding,
    OnboardingDecision, RiskAssessment, RiskInputs, RiskLevel,
};
pub use crate::trend::{
    percent_change, trend_direction, KpiSample, TrendDirection, TrendIndicator,
};
