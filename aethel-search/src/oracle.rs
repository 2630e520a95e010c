//! Gate-level description of a Grover phase oracle for a 2-base target.
//!
//! Nothing here is executed: the plan only lists what a circuit for the
//! target would contain, so it can be shown next to the amplitude chart.

use std::fmt::{self, Display};

use log::info;
use serde::Serialize;

use aethel_core::errors::Result;

use crate::codec::{encode_pair, format_ket};
use crate::consts::PAIR_QUBITS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CircuitStage {
    /// Hadamard on every qubit
    Superposition,
    /// X gates around a multi-controlled Z that flips the target's phase
    Oracle,
    /// Inversion about the mean
    Diffusion,
    Measurement,
}

impl Display for CircuitStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CircuitStage::Superposition => write!(f, "superposition"),
            CircuitStage::Oracle => write!(f, "oracle"),
            CircuitStage::Diffusion => write!(f, "diffusion"),
            CircuitStage::Measurement => write!(f, "measurement"),
        }
    }
}

/// Stages of a single Grover iteration, in circuit order.
pub const GROVER_STAGES: [CircuitStage; 4] = [
    CircuitStage::Superposition,
    CircuitStage::Oracle,
    CircuitStage::Diffusion,
    CircuitStage::Measurement,
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OraclePlan {
    pub target: String,
    pub binary_target: String,
    pub num_qubits: usize,
    /// Qubits wrapped in X gates before and after the controlled-Z.
    pub x_gate_qubits: Vec<usize>,
    pub stages: Vec<CircuitStage>,
}

impl OraclePlan {
    ///
    /// Describe the oracle and search circuit for `target`.
    ///
    /// # Errors
    /// Same as [encode_pair]: the target must be exactly two of A, C, G, T.
    ///
    pub fn for_target(target: &str) -> Result<Self> {
        info!("Initializing quantum search for DNA sequence: {}", target);

        let binary_target = encode_pair(target)?;
        let x_gate_qubits = binary_target
            .chars()
            .enumerate()
            .filter(|(_, bit)| *bit == '0')
            .map(|(qubit, _)| qubit)
            .collect();

        Ok(OraclePlan {
            target: target.to_string(),
            binary_target,
            num_qubits: PAIR_QUBITS,
            x_gate_qubits,
            stages: GROVER_STAGES.to_vec(),
        })
    }

    pub fn ket(&self) -> String {
        format_ket(&self.binary_target)
    }
}
