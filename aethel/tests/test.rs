use rstest::*;

use aethel::chrono::{ChronoEngine, FoldingStatus, Species, estimate, map_to_notes};
use aethel::core::{GeneticSequence, SequenceError};
use aethel::origami::{ProteinOrigami, sketch};
use aethel::search::{encode_pair, mock_amplitudes};

#[fixture]
fn dashboard_fragment() -> GeneticSequence {
    GeneticSequence::from_input("atgccgtagctaa")
}

#[fixture]
fn reference_chain() -> GeneticSequence {
    GeneticSequence::from("HPHPPHH")
}

mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[rstest]
    fn test_folding_properties(dashboard_fragment: GeneticSequence) {
        let length = dashboard_fragment.len() as f64;
        let mut previous_frequency = f64::INFINITY;

        for step in 0..=80 {
            let gravity = step as f64 * 0.25;
            let result = estimate(&dashboard_fragment, gravity);

            assert_eq!(
                result.quantum_knots,
                (length * gravity * 1.618 / 10.0).floor() as i64
            );
            assert!(result.chrono_frequency < previous_frequency);
            previous_frequency = result.chrono_frequency;
            assert_eq!(result.status == FoldingStatus::Stabilized, gravity < 10.0);
        }

        assert_eq!(estimate(&dashboard_fragment, 0.0).chrono_frequency, 440.0);
    }

    #[rstest]
    fn test_spectral_mapping() {
        let labels = map_to_notes(&GeneticSequence::from("ATGCX")).labels();
        assert_eq!(labels, vec!["C4", "E4", "B4", "G4", "None"]);
    }

    #[rstest]
    fn test_codec_and_amplitudes() {
        assert_eq!(encode_pair("AT").unwrap(), "0011");
        assert!(matches!(
            encode_pair("Z"),
            Err(SequenceError::InvalidSymbol { symbol: 'Z', .. })
        ));

        let amplified = mock_amplitudes("AT");
        assert_eq!(amplified.len(), 16);
        assert!(
            amplified
                .iter()
                .all(|e| e.probability == if e.sequence == "AT" { 0.6 } else { 0.03 })
        );

        let untouched = mock_amplitudes("ZZ");
        assert!(untouched.iter().all(|e| e.probability == 0.03));
    }

    #[rstest]
    fn test_lattice_sketch(reference_chain: GeneticSequence) {
        use aethel::origami::BeadColor::{Blue, Red};

        let result = sketch(&reference_chain);
        assert_eq!(
            result.coordinates,
            [(0, 0), (1, 0), (1, 1), (0, 1), (-1, 1), (-1, 0), (0, -1)]
        );
        assert_eq!(result.colors, vec![Red, Blue, Red, Blue, Blue, Red, Red]);
        assert_eq!(ProteinOrigami::new(reference_chain).fold().sketch, result);
    }

    #[rstest]
    fn test_repeated_calls_are_identical(
        dashboard_fragment: GeneticSequence,
        reference_chain: GeneticSequence,
    ) {
        let engine = ChronoEngine::new(Species::from("Steller's Sea Cow"), dashboard_fragment);
        let a = engine.simulate_relativistic_folding(7.25);
        let b = engine.simulate_relativistic_folding(7.25);
        assert_eq!(a.complexity.to_bits(), b.complexity.to_bits());
        assert_eq!(a.chrono_frequency.to_bits(), b.chrono_frequency.to_bits());
        assert_eq!(engine.spectral_biography(), engine.spectral_biography());
        assert_eq!(mock_amplitudes("GT"), mock_amplitudes("GT"));
        assert_eq!(sketch(&reference_chain), sketch(&reference_chain));
    }
}
