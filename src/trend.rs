//! Period-over-period trend analysis for arbitrary KPIs.

use serde::{Deserialize, Serialize};

/// Two readings of the same named metric across consecutive periods
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KpiSample {
    pub current: f64,
    pub previous: f64,
}

/// Sign of the period-over-period movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrendDirection {
    Up,
    Down,
    Flat,
}

/// Directional trend with its desirability and magnitude.
///
/// `percent_change` is the absolute magnitude of the movement; the sign is
/// carried by `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendIndicator {
    pub direction: TrendDirection,
    pub is_good: bool,
    pub percent_change: f64,
}

/// Signed percentage change between two readings.
///
/// Guarded like the classification metrics: a zero previous value yields
/// exactly 0 rather than an error, so a KPI appearing for the first time
/// renders as flat.
pub fn percent_change(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        0.0
    } else {
        (current - previous) / previous * 100.0
    }
}

/// Classify the movement between two readings.
///
/// `inverse_good` flips desirability for metrics where falling is the
/// desirable direction, such as false-positive rate or alert latency. A flat
/// movement is never "good" in either orientation.
pub fn trend_direction(current: f64, previous: f64, inverse_good: bool) -> TrendIndicator {
    let diff = current - previous;
    let direction = if diff > 0.0 {
        TrendDirection::Up
    } else if diff < 0.0 {
        TrendDirection::Down
    } else {
        TrendDirection::Flat
    };
    let is_good = if inverse_good { diff < 0.0 } else { diff > 0.0 };

    TrendIndicator {
        direction,
        is_good,
        percent_change: percent_change(current, previous).abs(),
    }
}

impl KpiSample {
    pub fn new(current: f64, previous: f64) -> Self {
        Self { current, previous }
    }

    /// Signed percentage change of this sample
    pub fn percent_change(&self) -> f64 {
        percent_change(self.current, self.previous)
    }

    /// Trend of this sample
    pub fn trend(&self, inverse_good: bool) -> TrendIndicator {
        trend_direction(self.current, self.previous, inverse_good)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_movement_is_never_good() {
        assert!(!trend_direction(10.0, 10.0, false).is_good);
        assert!(!trend_direction(10.0, 10.0, true).is_good);
    }

    #[test]
    fn inverse_good_flips_desirability() {
        // false-positive rate falling is good
        let falling = trend_direction(3.0, 5.0, true);
        assert_eq!(falling.direction, TrendDirection::Down);
        assert!(falling.is_good);

        let rising = trend_direction(5.0, 3.0, true);
        assert_eq!(rising.direction, TrendDirection::Up);
        assert!(!rising.is_good);
    }

    #[test]
    fn indicator_magnitude_is_absolute() {
        let indicator = trend_direction(50.0, 100.0, false);
        assert_eq!(indicator.percent_change, 50.0);
        assert_eq!(indicator.direction, TrendDirection::Down);
    }
}
