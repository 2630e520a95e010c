//! Relativistic folding estimate.
//!
//! The "physics" is three closed-form expressions over the fragment length and
//! a gravity factor. Keep the arithmetic order as written so results are
//! reproducible bit-for-bit.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use aethel_core::models::GeneticSequence;

use crate::consts::{BASE_FREQUENCY_HZ, GOLDEN_RATIO, KNOT_SIZE, RUPTURE_GRAVITY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoldingStatus {
    Stabilized,
    Rupture,
}

impl FoldingStatus {
    pub fn from_gravity(gravity: f64) -> Self {
        if gravity < RUPTURE_GRAVITY {
            FoldingStatus::Stabilized
        } else {
            FoldingStatus::Rupture
        }
    }
}

impl Display for FoldingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FoldingStatus::Stabilized => write!(f, "Resurrected & Stabilized"),
            FoldingStatus::Rupture => write!(f, "Dimensional Rupture"),
        }
    }
}

/// Outcome of folding one fragment at one gravity setting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FoldingResult {
    pub complexity: f64,
    /// Resonant frequency of the fold, in Hz
    pub chrono_frequency: f64,
    pub quantum_knots: i64,
    pub status: FoldingStatus,
}

///
/// Estimate how a fragment folds under a given gravity factor.
///
/// * `complexity = len * gravity * 1.618`
/// * `chrono_frequency = 440 / (1 + gravity)`
/// * `quantum_knots = floor(complexity / 10)`
/// * `status` is `Stabilized` below gravity 10, `Rupture` otherwise
///
/// Gravity is expected to be non-negative; it is not checked here. Huge values
/// saturate: the frequency tends to 0 and the knot count clamps at `i64::MAX`.
///
pub fn estimate(sequence: &GeneticSequence, gravity: f64) -> FoldingResult {
    let complexity = sequence.len() as f64 * gravity * GOLDEN_RATIO;
    let chrono_frequency = BASE_FREQUENCY_HZ / (1.0 + gravity);

    FoldingResult {
        complexity,
        chrono_frequency,
        quantum_knots: (complexity / KNOT_SIZE).floor() as i64,
        status: FoldingStatus::from_gravity(gravity),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn mammoth_fragment() -> GeneticSequence {
        GeneticSequence::from("ATGCGGTA")
    }

    #[rstest]
    fn test_estimate_mammoth(mammoth_fragment: GeneticSequence) {
        let result = estimate(&mammoth_fragment, 4.5);
        assert_eq!(result.complexity, 8.0 * 4.5 * 1.618);
        assert_eq!(result.chrono_frequency, 80.0);
        assert_eq!(result.quantum_knots, 5);
        assert_eq!(result.status, FoldingStatus::Stabilized);
    }

    #[rstest]
    fn test_zero_gravity(mammoth_fragment: GeneticSequence) {
        let result = estimate(&mammoth_fragment, 0.0);
        assert_eq!(result.complexity, 0.0);
        assert_eq!(result.chrono_frequency, 440.0);
        assert_eq!(result.quantum_knots, 0);
        assert_eq!(result.status, FoldingStatus::Stabilized);
    }

    #[rstest]
    fn test_knots_follow_formula() {
        for length in [0usize, 1, 7, 13, 64] {
            let sequence = GeneticSequence::from("A".repeat(length));
            for step in 0..=40 {
                let gravity = step as f64 * 0.5;
                let expected = (length as f64 * gravity * 1.618 / 10.0).floor() as i64;
                assert_eq!(estimate(&sequence, gravity).quantum_knots, expected);
            }
        }
    }

    #[rstest]
    fn test_frequency_strictly_decreasing(mammoth_fragment: GeneticSequence) {
        let frequencies: Vec<f64> = (0..=200)
            .map(|step| estimate(&mammoth_fragment, step as f64 * 0.1).chrono_frequency)
            .collect();
        assert!(frequencies.windows(2).all(|w| w[0] > w[1]));
    }

    #[rstest]
    #[case(0.0, FoldingStatus::Stabilized)]
    #[case(9.99, FoldingStatus::Stabilized)]
    #[case(10.0, FoldingStatus::Rupture)]
    #[case(20.0, FoldingStatus::Rupture)]
    fn test_status_threshold(#[case] gravity: f64, #[case] expected: FoldingStatus) {
        let result = estimate(&GeneticSequence::from("ACGT"), gravity);
        assert_eq!(result.status, expected);
    }

    #[rstest]
    fn test_huge_gravity_saturates(mammoth_fragment: GeneticSequence) {
        let result = estimate(&mammoth_fragment, f64::INFINITY);
        assert_eq!(result.chrono_frequency, 0.0);
        assert_eq!(result.quantum_knots, i64::MAX);
        assert_eq!(result.status, FoldingStatus::Rupture);

        let result = estimate(&mammoth_fragment, 1e300);
        assert!(result.chrono_frequency > 0.0 && result.chrono_frequency < 1e-290);
        assert_eq!(result.quantum_knots, i64::MAX);
    }

    #[rstest]
    fn test_estimate_is_idempotent(mammoth_fragment: GeneticSequence) {
        let a = estimate(&mammoth_fragment, 3.7);
        let b = estimate(&mammoth_fragment, 3.7);
        assert_eq!(a.complexity.to_bits(), b.complexity.to_bits());
        assert_eq!(a.chrono_frequency.to_bits(), b.chrono_frequency.to_bits());
        assert_eq!(a, b);
    }

    #[rstest]
    fn test_status_labels() {
        assert_eq!(FoldingStatus::Stabilized.to_string(), "Resurrected & Stabilized");
        assert_eq!(FoldingStatus::Rupture.to_string(), "Dimensional Rupture");
    }
}
