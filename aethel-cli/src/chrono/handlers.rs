use anyhow::Result;
use clap::ArgMatches;
use serde::Serialize;

use aethel_chrono::consts::DEFAULT_SPIRAL_SAMPLES;
use aethel_chrono::{
    ChronoEngine, FoldingResult, SpectralBiography, Species, SpiralPoint, event_horizon_spiral,
    is_dimensionally_unstable,
};
use aethel_core::GeneticSequence;

use crate::config::DashboardConfig;

#[derive(Serialize, Debug)]
pub struct ChronoReport {
    species: Species,
    fragment: GeneticSequence,
    gravity: f64,
    folding: FoldingResult,
    status_label: String,
    dimensional_instability: bool,
    gene_song: SpectralBiography,
    #[serde(skip_serializing_if = "Option::is_none")]
    spiral: Option<Vec<SpiralPoint>>,
}

pub fn chrono_report(
    species: &str,
    fragment: &str,
    gravity: f64,
    spiral_samples: Option<usize>,
) -> ChronoReport {
    let engine = ChronoEngine::new(Species::from(species), GeneticSequence::from_input(fragment));
    let folding = engine.simulate_relativistic_folding(gravity);

    ChronoReport {
        gene_song: engine.spectral_biography(),
        status_label: folding.status.to_string(),
        dimensional_instability: is_dimensionally_unstable(gravity),
        spiral: spiral_samples.map(|n| event_horizon_spiral(gravity, n)),
        species: engine.species,
        fragment: engine.fragment,
        gravity,
        folding,
    }
}

pub fn render_chrono_text(report: &ChronoReport) -> String {
    let mut lines = vec![
        format!("Species: {}", report.species),
        format!("Quantum Knot Density: {} Knots", report.folding.quantum_knots),
        format!("Resonant Frequency: {:.2} Hz", report.folding.chrono_frequency),
    ];

    if report.dimensional_instability {
        lines.push(
            "CRITICAL: Dimensional instability detected. Protein is folding into 4-dimensional space."
                .to_string(),
        );
    } else {
        lines.push(format!("Status: {}", report.status_label));
    }

    lines.push(format!("Gene-Song: {}", report.gene_song));

    if let Some(spiral) = &report.spiral {
        lines.push(format!("Event horizon trajectory: {} points", spiral.len()));
    }

    lines.join("\n")
}

/// Spiral sample count for the report; `None` when `--no-spiral` is given.
pub fn spiral_samples(matches: &ArgMatches) -> Option<usize> {
    if matches.get_flag("no-spiral") {
        return None;
    }
    Some(
        matches
            .get_one::<usize>("spiral")
            .copied()
            .unwrap_or(DEFAULT_SPIRAL_SAMPLES),
    )
}

pub fn run_chrono(matches: &ArgMatches, config: &DashboardConfig) -> Result<()> {
    let species = matches
        .get_one::<String>("species")
        .map(String::as_str)
        .unwrap_or(config.species());
    let fragment = matches
        .get_one::<String>("fragment")
        .map(String::as_str)
        .unwrap_or(config.fragment());
    let gravity = matches
        .get_one::<f64>("gravity")
        .copied()
        .unwrap_or(config.gravity());
    let report = chrono_report(species, fragment, gravity, spiral_samples(matches));

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", render_chrono_text(&report));
    }

    Ok(())
}
