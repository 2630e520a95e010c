//! 2D lattice sketch for HP sequences.
//!
//! The sketch always draws the same seven-point path. Colors follow the input,
//! one per residue, so the two lists differ in length whenever the sequence is
//! not seven residues long. Renderers are expected to cope with that.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use aethel_core::consts::HYDROPHOBIC;
use aethel_core::models::GeneticSequence;

use crate::consts::{HH_CONTACT_ENERGY, LATTICE_BEADS, LATTICE_PATH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BeadColor {
    Red,
    Blue,
}

impl BeadColor {
    /// Hydrophobic residues are red, everything else is blue.
    pub fn for_residue(residue: char) -> Self {
        if residue == HYDROPHOBIC {
            BeadColor::Red
        } else {
            BeadColor::Blue
        }
    }
}

impl Display for BeadColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BeadColor::Red => write!(f, "red"),
            BeadColor::Blue => write!(f, "blue"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatticeSketch {
    pub coordinates: [(i32, i32); LATTICE_BEADS],
    pub colors: Vec<BeadColor>,
}

///
/// Sketch an HP sequence on the 2D lattice.
///
/// # Arguments
/// * `sequence` - residues; `H` is hydrophobic, anything else is drawn as polar
///
/// # Returns
/// * the fixed seven coordinates and one color per residue
///
pub fn sketch(sequence: &GeneticSequence) -> LatticeSketch {
    LatticeSketch {
        coordinates: LATTICE_PATH,
        colors: sequence.symbols().map(BeadColor::for_residue).collect(),
    }
}

///
/// HP-model energy of the sketched fold.
///
/// Counts pairs of hydrophobic residues that sit on neighbouring lattice
/// points without being neighbours in the chain, scoring -1 each. Only
/// residues that have a drawn bead (the first seven) take part.
///
pub fn contact_energy(sketch: &LatticeSketch, sequence: &GeneticSequence) -> i32 {
    let hydrophobic: Vec<(usize, (i32, i32))> = sequence
        .symbols()
        .zip(sketch.coordinates.iter())
        .enumerate()
        .filter(|(_, (residue, _))| *residue == HYDROPHOBIC)
        .map(|(i, (_, &point))| (i, point))
        .collect();

    let mut energy = 0;
    for (a, &(i, (xi, yi))) in hydrophobic.iter().enumerate() {
        for &(j, (xj, yj)) in &hydrophobic[a + 1..] {
            let bonded = j == i + 1;
            let adjacent = (xi - xj).abs() + (yi - yj).abs() == 1;
            if adjacent && !bonded {
                energy += HH_CONTACT_ENERGY;
            }
        }
    }
    energy
}
