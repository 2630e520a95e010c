use anyhow::{Context, Result};
use clap::ArgMatches;
use log::warn;

use aethel_core::{GeneticSequence, SequenceAlphabet};
use aethel_origami::{FoldOutcome, ProteinOrigami};

use crate::config::DashboardConfig;

pub fn origami_outcome(raw_sequence: &str, strict: bool) -> Result<FoldOutcome> {
    let sequence = GeneticSequence::from_input(raw_sequence);

    if let Err(e) = sequence.require_alphabet(SequenceAlphabet::Hp) {
        if strict {
            return Err(e).context("Sequence must only contain 'H' and 'P'");
        }
        warn!("{}; non-H residues are drawn as polar", e);
    }

    Ok(ProteinOrigami::new(sequence).fold())
}

pub fn render_origami_text(outcome: &FoldOutcome) -> String {
    let mut lines = vec![format!(
        "Finding minimal energy conformation for: {}",
        outcome.sequence
    )];

    let residues: Vec<char> = outcome.sequence.symbols().collect();
    for (i, (x, y)) in outcome.sketch.coordinates.iter().enumerate() {
        let residue = residues.get(i).map_or('-', |r| *r);
        let color = outcome
            .sketch
            .colors
            .get(i)
            .map_or("-".to_string(), |c| c.to_string());
        lines.push(format!("  {} ({:>2}, {:>2}) {}", residue, x, y, color));
    }

    lines.push(outcome.to_string());
    lines.join("\n")
}

pub fn run_origami(matches: &ArgMatches, config: &DashboardConfig) -> Result<()> {
    let sequence = matches
        .get_one::<String>("sequence")
        .map(String::as_str)
        .unwrap_or(config.protein());
    let strict = matches.get_flag("strict");

    let outcome = origami_outcome(sequence, strict)?;

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!("{}", render_origami_text(&outcome));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use aethel_origami::BeadColor;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_reference_fold_text() {
        let outcome = origami_outcome("hphpphh", true).unwrap();
        assert_eq!(outcome.sketch.colors[0], BeadColor::Red);
        assert_eq!(
            render_origami_text(&outcome),
            [
                "Finding minimal energy conformation for: HPHPPHH",
                "  H ( 0,  0) red",
                "  P ( 1,  0) blue",
                "  H ( 1,  1) red",
                "  P ( 0,  1) blue",
                "  P (-1,  1) blue",
                "  H (-1,  0) red",
                "  H ( 0, -1) red",
                "Optimal fold found for HPHPPHH: contact energy -2",
            ]
            .join("\n")
        );
    }

    #[rstest]
    fn test_short_sequence_leaves_beads_blank() {
        let outcome = origami_outcome("HP", false).unwrap();
        let text = render_origami_text(&outcome);
        assert!(text.contains("  - ( 0, -1) -"));
    }

    #[rstest]
    fn test_strict_mode_rejects_non_hp() {
        assert!(origami_outcome("HPX", true).is_err());
        assert!(origami_outcome("", true).is_err());
        assert_eq!(origami_outcome("HPX", false).unwrap().sketch.colors.len(), 3);
    }
}
