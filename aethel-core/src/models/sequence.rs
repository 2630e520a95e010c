use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{DNA_SYMBOLS, HP_SYMBOLS};
use crate::errors::{Result, SequenceError};

/// The alphabet a [GeneticSequence] is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SequenceAlphabet {
    /// Nucleotides: A, C, G, T
    Dna,
    /// Hydrophobic-polar residues: H, P
    Hp,
    /// Empty, mixed, or anything outside the two alphabets above
    Unknown,
}

impl SequenceAlphabet {
    /// Symbols accepted by this alphabet. `Unknown` accepts nothing.
    pub fn symbols(&self) -> &'static [char] {
        match self {
            SequenceAlphabet::Dna => &DNA_SYMBOLS,
            SequenceAlphabet::Hp => &HP_SYMBOLS,
            SequenceAlphabet::Unknown => &[],
        }
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.symbols().contains(&symbol)
    }
}

impl Display for SequenceAlphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceAlphabet::Dna => write!(f, "DNA"),
            SequenceAlphabet::Hp => write!(f, "HP"),
            SequenceAlphabet::Unknown => write!(f, "unknown"),
        }
    }
}

impl FromStr for SequenceAlphabet {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dna" => Ok(SequenceAlphabet::Dna),
            "hp" => Ok(SequenceAlphabet::Hp),
            "unknown" => Ok(SequenceAlphabet::Unknown),
            _ => Err(()),
        }
    }
}

///
/// An ordered run of sequence symbols, either nucleotides or HP residues.
///
/// The symbols are kept exactly as given; nothing is validated on construction.
/// Use [GeneticSequence::from_input] to apply the usual input normalization
/// (trim and upper-case), and [GeneticSequence::require_alphabet] when a caller
/// wants strict checking.
///
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeneticSequence(String);

impl GeneticSequence {
    ///
    /// Build a sequence from raw user input: surrounding whitespace is removed
    /// and every symbol is upper-cased.
    ///
    pub fn from_input(raw: &str) -> Self {
        GeneticSequence(raw.trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of symbols (not bytes) in the sequence.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }

    ///
    /// Guess which alphabet the sequence is drawn from.
    ///
    /// Returns `Unknown` for an empty sequence or when symbols from both
    /// alphabets (or neither) are present.
    ///
    pub fn alphabet(&self) -> SequenceAlphabet {
        guess_alphabet(&self.0)
    }

    ///
    /// Strict check that every symbol belongs to `expected`.
    ///
    /// # Errors
    /// * `EmptySequence` if there are no symbols
    /// * `UnexpectedAlphabet` if any symbol falls outside `expected`
    ///
    pub fn require_alphabet(&self, expected: SequenceAlphabet) -> Result<()> {
        if self.is_empty() {
            return Err(SequenceError::EmptySequence);
        }
        if self.symbols().all(|s| expected.contains(s)) {
            Ok(())
        } else {
            Err(SequenceError::UnexpectedAlphabet {
                sequence: self.0.clone(),
                expected,
            })
        }
    }
}

impl From<&str> for GeneticSequence {
    fn from(value: &str) -> Self {
        GeneticSequence(value.to_string())
    }
}

impl From<String> for GeneticSequence {
    fn from(value: String) -> Self {
        GeneticSequence(value)
    }
}

impl AsRef<str> for GeneticSequence {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for GeneticSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Determine the single alphabet that covers every symbol of `sequence`.
pub fn guess_alphabet(sequence: &str) -> SequenceAlphabet {
    if sequence.is_empty() {
        return SequenceAlphabet::Unknown;
    }

    for candidate in [SequenceAlphabet::Dna, SequenceAlphabet::Hp] {
        if sequence.chars().all(|s| candidate.contains(s)) {
            return candidate;
        }
    }

    SequenceAlphabet::Unknown
}
