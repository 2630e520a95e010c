use std::fmt::{self, Display};

use log::{debug, info};
use serde::Serialize;

use aethel_core::models::GeneticSequence;

use crate::lattice::{LatticeSketch, contact_energy, sketch};

/// A protein chain in the HP model, ready to be folded onto the lattice.
#[derive(Debug, Clone, PartialEq)]
pub struct ProteinOrigami {
    pub sequence: GeneticSequence,
}

/// Result of folding a chain: the sketch and its HP contact energy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoldOutcome {
    pub sequence: GeneticSequence,
    pub sketch: LatticeSketch,
    pub contact_energy: i32,
}

impl ProteinOrigami {
    pub fn new(sequence: GeneticSequence) -> Self {
        info!("Loading protein origami sequence: {}", sequence);
        ProteinOrigami { sequence }
    }

    pub fn bead_count(&self) -> usize {
        self.sequence.len()
    }

    pub fn sketch(&self) -> LatticeSketch {
        sketch(&self.sequence)
    }

    ///
    /// Fold the chain. The conformation is the fixed lattice sketch; only its
    /// colors and energy depend on the sequence.
    ///
    pub fn fold(&self) -> FoldOutcome {
        let sketch = self.sketch();
        let contact_energy = contact_energy(&sketch, &self.sequence);
        debug!(
            "folded {} beads onto {} lattice points, energy {}",
            self.bead_count(),
            sketch.coordinates.len(),
            contact_energy
        );

        FoldOutcome {
            sequence: self.sequence.clone(),
            sketch,
            contact_energy,
        }
    }
}

impl Display for FoldOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Optimal fold found for {}: contact energy {}",
            self.sequence, self.contact_energy
        )
    }
}
