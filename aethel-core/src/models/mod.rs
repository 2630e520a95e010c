pub mod sequence;

// re-export for cleaner imports
pub use self::sequence::{GeneticSequence, SequenceAlphabet, guess_alphabet};
