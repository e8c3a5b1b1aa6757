//! Property tests for the guarded-division and range invariants.

use amlytics::classification::{detection_rate, false_positive_rate, ConfusionCounts};
use amlytics::drift::compute_psi;
use amlytics::risk::{classify_risk_level, decision_for_level, score_onboarding, RiskInputs};
use amlytics::trend::{percent_change, trend_direction, TrendDirection};
use proptest::prelude::*;

// keep counts small enough that sums stay exact in f64
const MAX_COUNT: u64 = 1_000_000;

proptest! {
    #[test]
    fn confusion_metrics_stay_within_unit_interval(
        tp in 0..MAX_COUNT,
        fp in 0..MAX_COUNT,
        tn in 0..MAX_COUNT,
        fn_ in 0..MAX_COUNT,
    ) {
        let metrics = ConfusionCounts::new(tp, fp, tn, fn_).metrics();
        for value in [metrics.precision, metrics.recall, metrics.f1_score, metrics.accuracy] {
            prop_assert!((0.0..=1.0).contains(&value));
            prop_assert!(value.is_finite());
        }
    }

    #[test]
    fn rates_stay_within_percent_range(a in 0..MAX_COUNT, b in 0..MAX_COUNT) {
        let detection = detection_rate(a, b);
        let fpr = false_positive_rate(a, b);
        prop_assert!((0.0..=100.0).contains(&detection));
        prop_assert!((0.0..=100.0).contains(&fpr));
    }

    #[test]
    fn percent_change_never_faults(current in -1e9f64..1e9, previous in -1e9f64..1e9) {
        // a near-zero previous reading may overflow toward infinity, but the
        // guard means no input ever produces NaN
        let change = percent_change(current, previous);
        prop_assert!(!change.is_nan());
    }

    #[test]
    fn trend_magnitude_is_non_negative(current in -1e9f64..1e9, previous in -1e9f64..1e9) {
        let indicator = trend_direction(current, previous, false);
        prop_assert!(indicator.percent_change >= 0.0);
    }

    #[test]
    fn flat_trends_are_never_good(value in -1e9f64..1e9, inverse in any::<bool>()) {
        let indicator = trend_direction(value, value, inverse);
        prop_assert_eq!(indicator.direction, TrendDirection::Flat);
        prop_assert!(!indicator.is_good);
    }

    #[test]
    fn in_range_inputs_score_within_scale(
        device in 0.0f64..=100.0,
        geo in 0.0f64..=100.0,
        kyc in 0.0f64..=100.0,
        behavioral in 0.0f64..=100.0,
    ) {
        let score = score_onboarding(&RiskInputs {
            device_trust_score: device,
            geo_risk_score: geo,
            kyc_completeness: kyc,
            behavioral_anomaly: behavioral,
        });
        prop_assert!((-0.1..=100.1).contains(&score));
        // every producible score classifies and decides without panicking
        let _ = decision_for_level(classify_risk_level(score));
    }

    #[test]
    fn equal_distributions_never_drift(buckets in proptest::collection::vec(0.001f64..1.0, 1..20)) {
        let psi = compute_psi(&buckets, &buckets).unwrap();
        prop_assert_eq!(psi, 0.0);
    }

    #[test]
    fn psi_is_finite_for_positive_distributions(
        pair in proptest::collection::vec((0.001f64..1.0, 0.001f64..1.0), 1..20)
    ) {
        let actual: Vec<f64> = pair.iter().map(|(a, _)| *a).collect();
        let expected: Vec<f64> = pair.iter().map(|(_, e)| *e).collect();
        let psi = compute_psi(&actual, &expected).unwrap();
        prop_assert!(psi.is_finite());
        prop_assert!(psi >= 0.0);
    }
}
