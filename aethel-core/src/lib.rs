//! # Core models for aethel
//!
//! Shared building blocks for the aethel tool crates: the [models::GeneticSequence]
//! type that every estimator consumes, the alphabets it can be drawn from, and the
//! [errors::SequenceError] taxonomy.
pub mod consts;
pub mod errors;
pub mod models;

// re-exports
pub use errors::{Result, SequenceError};
pub use models::{GeneticSequence, SequenceAlphabet};
