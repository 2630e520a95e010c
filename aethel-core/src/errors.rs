use thiserror::Error;

use crate::models::SequenceAlphabet;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    #[error("Invalid symbol '{symbol}' at position {position}: expected one of A, C, G, T")]
    InvalidSymbol { symbol: char, position: usize },

    #[error("Invalid sequence length: expected {expected}, found {found}")]
    InvalidLength { expected: usize, found: usize },

    #[error("Sequence '{sequence}' is not a valid {expected} sequence")]
    UnexpectedAlphabet {
        sequence: String,
        expected: SequenceAlphabet,
    },

    #[error("Sequence is empty")]
    EmptySequence,
}

pub type Result<T> = std::result::Result<T, SequenceError>;
