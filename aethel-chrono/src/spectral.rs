use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use aethel_core::models::GeneticSequence;

use crate::consts::{GENE_SONG_SEPARATOR, SILENT_NOTE_LABEL};

/// A note of the gene-song. Symbols without a note map to [Note::Silent],
/// which is labelled `"None"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Note {
    C4,
    E4,
    G4,
    B4,
    #[serde(rename = "None")]
    Silent,
}

/// Nucleotide to note policy.
const NOTE_TABLE: [(char, Note); 4] = [
    ('A', Note::C4),
    ('T', Note::E4),
    ('C', Note::G4),
    ('G', Note::B4),
];

impl Note {
    pub fn for_symbol(symbol: char) -> Self {
        NOTE_TABLE
            .iter()
            .find(|(s, _)| *s == symbol)
            .map_or(Note::Silent, |(_, note)| *note)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Note::C4 => "C4",
            Note::E4 => "E4",
            Note::G4 => "G4",
            Note::B4 => "B4",
            Note::Silent => SILENT_NOTE_LABEL,
        }
    }
}

impl Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

///
/// The notes of a fragment, one per symbol, in sequence order.
///
/// Displays as the gene-song, e.g. `C4 ➔ E4 ➔ B4`.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpectralBiography(pub Vec<Note>);

impl SpectralBiography {
    pub fn notes(&self) -> &[Note] {
        &self.0
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.0.iter().map(Note::label).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for SpectralBiography {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.labels().join(GENE_SONG_SEPARATOR))
    }
}

/// Map every symbol of `sequence` to its note. Never fails; unknown symbols
/// become [Note::Silent].
pub fn map_to_notes(sequence: &GeneticSequence) -> SpectralBiography {
    SpectralBiography(sequence.symbols().map(Note::for_symbol).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case("ATGC", vec!["C4", "E4", "B4", "G4"])]
    #[case("TAGC", vec!["E4", "C4", "B4", "G4"])]
    #[case("ATGCX", vec!["C4", "E4", "B4", "G4", "None"])]
    #[case("atgc", vec!["None", "None", "None", "None"])]
    #[case("", vec![])]
    fn test_map_to_notes(#[case] sequence: &str, #[case] expected: Vec<&str>) {
        let biography = map_to_notes(&GeneticSequence::from(sequence));
        assert_eq!(biography.labels(), expected);
        assert_eq!(biography.len(), sequence.chars().count());
    }

    #[rstest]
    fn test_gene_song_display() {
        let biography = map_to_notes(&GeneticSequence::from("ATN"));
        assert_eq!(biography.to_string(), "C4 ➔ E4 ➔ None");
    }

    #[rstest]
    fn test_silent_note_serializes_as_none_label() {
        let biography = map_to_notes(&GeneticSequence::from("AX"));
        let json = serde_json::to_string(&biography).unwrap();
        assert_eq!(json, "[\"C4\",\"None\"]");
    }
}
