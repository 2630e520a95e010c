//! Mock probability amplitudes after one Grover iteration over 2-base sequences.
//!
//! The table is a display toy: it is deliberately not normalized.

use log::debug;
use serde::Serialize;

use crate::consts::{AMPLIFIED_PROBABILITY, BASELINE_PROBABILITY, CANONICAL_PAIRS};

/// One bar of the amplitude chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AmplitudeEntry {
    pub sequence: &'static str,
    pub probability: f64,
}

/// Display probabilities for all 16 2-base sequences, in canonical order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AmplitudeTable {
    pub entries: Vec<AmplitudeEntry>,
}

impl AmplitudeTable {
    /// A table with every state at the baseline value.
    pub fn baseline() -> Self {
        AmplitudeTable {
            entries: CANONICAL_PAIRS
                .iter()
                .map(|&sequence| AmplitudeEntry {
                    sequence,
                    probability: BASELINE_PROBABILITY,
                })
                .collect(),
        }
    }

    pub fn get(&self, sequence: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.sequence == sequence)
            .map(|e| e.probability)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AmplitudeEntry> {
        self.entries.iter()
    }

    /// The amplified entry, if any target was matched.
    pub fn amplified(&self) -> Option<&AmplitudeEntry> {
        self.entries
            .iter()
            .find(|e| e.probability == AMPLIFIED_PROBABILITY)
    }

    /// Sum of all displayed values (0.48 without a target, 1.05 with one).
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|e| e.probability).sum()
    }
}

///
/// Build the mock amplitude table for a 2-base search target.
///
/// Targets that are not one of the 16 canonical sequences (wrong length, lower
/// case, symbols outside A, C, G, T) are silently ignored and the baseline
/// table is returned.
///
/// # Arguments
/// * `target` - the queried 2-base sequence, e.g. `"AT"`
///
pub fn mock_amplitudes(target: &str) -> AmplitudeTable {
    let mut table = AmplitudeTable::baseline();

    match table.entries.iter_mut().find(|e| e.sequence == target) {
        Some(entry) => entry.probability = AMPLIFIED_PROBABILITY,
        None => debug!("no canonical sequence matches target {:?}; nothing amplified", target),
    }

    table
}
