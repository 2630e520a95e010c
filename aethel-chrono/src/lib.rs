//! # Chrono-necro folding
//!
//! Estimates for folding ancient DNA fragments under relativistic gravity:
//!
//! - a folding estimate (complexity, resonant frequency, quantum knots, status)
//! - the fragment's gene-song, one note per nucleotide
//! - the event-horizon spiral a dashboard plots next to the estimate
//!
//! # Example
//!
//! ```
//! use aethel_chrono::{ChronoEngine, Species};
//! use aethel_core::GeneticSequence;
//!
//! let engine = ChronoEngine::new(Species::WoollyMammoth, GeneticSequence::from("ATGCGGTA"));
//! let result = engine.simulate_relativistic_folding(4.5);
//! assert_eq!(result.quantum_knots, 5);
//! ```
pub mod consts;
pub mod engine;
pub mod folding;
pub mod horizon;
pub mod species;
pub mod spectral;

// re-exports
pub use engine::ChronoEngine;
pub use folding::{FoldingResult, FoldingStatus, estimate};
pub use horizon::{SpiralPoint, event_horizon_spiral, is_dimensionally_unstable};
pub use species::Species;
pub use spectral::{Note, SpectralBiography, map_to_notes};
