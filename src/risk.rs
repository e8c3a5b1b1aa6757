//! Onboarding risk scoring and decisioning.
//!
//! The composite score is a fixed-weight linear blend of four signals. Trust
//! and completeness signals are inverted (higher is safer), risk and anomaly
//! signals contribute directly. Weights sum to 1.0 so the score lives on the
//! same 0-100 scale as its inputs.

use serde::{Deserialize, Serialize};

const DEVICE_TRUST_WEIGHT: f64 = 0.35;
const GEO_RISK_WEIGHT: f64 = 0.25;
const KYC_COMPLETENESS_WEIGHT: f64 = 0.20;
const BEHAVIORAL_ANOMALY_WEIGHT: f64 = 0.20;

/// Raw onboarding signals for a single applicant.
///
/// Each field is conventionally in `[0, 100]` but the scorer does not clamp;
/// out-of-range values are the caller's responsibility and flow through the
/// weighted formula unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskInputs {
    pub device_trust_score: f64,
    pub geo_risk_score: f64,
    pub kyc_completeness: f64,
    pub behavioral_anomaly: f64,
}

/// Risk bands for a composite onboarding score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,      // score < 30
    Medium,   // 30 <= score < 60
    High,     // 60 <= score < 80
    Critical, // score >= 80
}

/// Analyst workflow decision implied by a risk level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OnboardingDecision {
    AutoApprove,
    StandardReview,
    EnhancedDueDiligence,
    RejectEscalate,
}

/// Composite score together with its band.
///
/// Recomputed from [`RiskInputs`] on every call; carries no lifecycle of
/// its own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub score: f64,
    pub level: RiskLevel,
}

/// Compute the weighted composite onboarding score, rounded to 1 decimal.
///
/// Best-case inputs (full trust and completeness, zero geo risk and anomaly)
/// score 0.0; worst-case inputs score 100.0.
pub fn score_onboarding(inputs: &RiskInputs) -> f64 {
    let score = DEVICE_TRUST_WEIGHT * (100.0 - inputs.device_trust_score)
        + GEO_RISK_WEIGHT * inputs.geo_risk_score
        + KYC_COMPLETENESS_WEIGHT * (100.0 - inputs.kyc_completeness)
        + BEHAVIORAL_ANOMALY_WEIGHT * inputs.behavioral_anomaly;

    (score * 10.0).round() / 10.0
}

/// Map a score to its band using half-open intervals, lower bound inclusive.
///
/// Scores below 0 classify as `Low` and scores of 80 or more as `Critical`,
/// so any finite score has a band even when inputs were out of range.
pub fn classify_risk_level(score: f64) -> RiskLevel {
    if score < 30.0 {
        RiskLevel::Low
    } else if score < 60.0 {
        RiskLevel::Medium
    } else if score < 80.0 {
        RiskLevel::High
    } else {
        RiskLevel::Critical
    }
}

/// Score and classify in one step
pub fn assess_onboarding(inputs: &RiskInputs) -> RiskAssessment {
    let score = score_onboarding(inputs);
    RiskAssessment {
        score,
        level: classify_risk_level(score),
    }
}

/// Deterministic decision lookup for a risk band
pub fn decision_for_level(level: RiskLevel) -> OnboardingDecision {
    match level {
        RiskLevel::Low => OnboardingDecision::AutoApprove,
        RiskLevel::Medium => OnboardingDecision::StandardReview,
        RiskLevel::High => OnboardingDecision::EnhancedDueDiligence,
        RiskLevel::Critical => OnboardingDecision::RejectEscalate,
    }
}

/// Severity of a transaction alert on a 0-100 scale.
///
/// Amount is normalized against a 10 000 ceiling and velocity against a
/// 10x ceiling, both capped at 1; the risk score is taken as a fraction of
/// 100. Blend weights are 0.3 amount / 0.5 risk / 0.2 velocity.
pub fn alert_severity(amount: f64, risk_score: f64, velocity_factor: f64) -> u32 {
    let normalized_amount = (amount / 10_000.0).min(1.0);
    let normalized_risk = risk_score / 100.0;
    let normalized_velocity = (velocity_factor / 10.0).min(1.0);

    let severity =
        normalized_amount * 0.3 + normalized_risk * 0.5 + normalized_velocity * 0.2;
    (severity * 100.0).round() as u32
}
