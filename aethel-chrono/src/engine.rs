use log::{debug, info};

use aethel_core::models::GeneticSequence;

use crate::folding::{FoldingResult, estimate};
use crate::species::Species;
use crate::spectral::{SpectralBiography, map_to_notes};

///
/// A DNA fragment recovered for a species, ready to be folded.
///
/// Constructing an engine emits a flavor event on the `log` facade; nothing is
/// printed unless the host installs a logger.
///
#[derive(Debug, Clone, PartialEq)]
pub struct ChronoEngine {
    pub species: Species,
    pub fragment: GeneticSequence,
}

impl ChronoEngine {
    pub fn new(species: Species, fragment: GeneticSequence) -> Self {
        info!("Resurrecting ancient logic gates for: {}", species);
        ChronoEngine { species, fragment }
    }

    ///
    /// Fold the fragment at the edge of a black hole.
    ///
    /// # Arguments
    /// * `gravity` - relativistic gravity factor, 0 to 20 by convention
    ///
    pub fn simulate_relativistic_folding(&self, gravity: f64) -> FoldingResult {
        let result = estimate(&self.fragment, gravity);
        debug!(
            "{} at {}G: {} knots, {:.2} Hz, {:?}",
            self.species, gravity, result.quantum_knots, result.chrono_frequency, result.status
        );
        result
    }

    /// The fragment's gene-song.
    pub fn spectral_biography(&self) -> SpectralBiography {
        map_to_notes(&self.fragment)
    }
}
