//! Deterministic sample-data generation for tests and demos.
//!
//! The dashboard around this crate refreshes its widgets with randomized
//! mock data on a timer. None of that belongs in the core, but tests and
//! demos still need plausible inputs, so this module provides a seedable
//! xorshift64 sequence and factories for the record types the analytics
//! functions consume. Given the same seed, every sequence is identical.

use crate::classification::ConfusionCounts;
use crate::trend::KpiSample;

/// Seedable deterministic generator for sample analytics inputs.
///
/// Not cryptographically secure and not statistically rigorous; fixture
/// data only.
#[derive(Debug, Clone)]
pub struct SampleRng {
    state: u64,
}

impl SampleRng {
    /// Create a generator from a seed. A zero seed is replaced with 1, since
    /// xorshift64 has a fixed point at zero.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Next value in `[0, 1)`
    pub fn next_f64(&mut self) -> f64 {
        // use the top 53 bits for a uniform double
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Next value in `[lo, hi)`
    pub fn next_in_range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }

    /// Next integer in `[0, bound)`
    pub fn next_count(&mut self, bound: u64) -> u64 {
        if bound == 0 {
            return 0;
        }
        self.next_u64() % bound
    }
}

/// A confusion matrix for a population of roughly `population` cases with a
/// low positive base rate, the shape AML alert data tends to have.
pub fn sample_confusion_counts(rng: &mut SampleRng, population: u64) -> ConfusionCounts {
    let positives = population / 20;
    let true_positive = rng.next_count(positives.max(1));
    let false_negative = positives.saturating_sub(true_positive);
    let false_positive = rng.next_count((positives / 2).max(1));
    let true_negative = population
        .saturating_sub(true_positive)
        .saturating_sub(false_negative)
        .saturating_sub(false_positive);

    ConfusionCounts {
        true_positive,
        false_positive,
        true_negative,
        false_negative,
    }
}

/// A bucketed distribution of `buckets` positive proportions summing to 1
pub fn sample_distribution(rng: &mut SampleRng, buckets: usize) -> Vec<f64> {
    let raw: Vec<f64> = (0..buckets).map(|_| rng.next_in_range(0.05, 1.0)).collect();
    let total: f64 = raw.iter().sum();
    raw.into_iter().map(|v| v / total).collect()
}

/// A KPI reading pair centered on `base`, each within `base ± variance`
pub fn sample_kpi_pair(rng: &mut SampleRng, base: f64, variance: f64) -> KpiSample {
    KpiSample {
        current: rng.next_in_range(base - variance, base + variance),
        previous: rng.next_in_range(base - variance, base + variance),
    }
}
