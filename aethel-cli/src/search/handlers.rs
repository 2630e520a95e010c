use anyhow::{Context, Result};
use clap::ArgMatches;
use log::warn;
use serde::Serialize;

use aethel_core::GeneticSequence;
use aethel_search::{AmplitudeTable, OraclePlan, mock_amplitudes};

use crate::config::DashboardConfig;

#[derive(Serialize, Debug)]
pub struct SearchReport {
    target: GeneticSequence,
    /// Absent when the target cannot be encoded.
    #[serde(skip_serializing_if = "Option::is_none")]
    oracle: Option<OraclePlan>,
    amplitudes: AmplitudeTable,
}

///
/// Build the search report for a raw target.
///
/// In strict mode an unencodable target is an error. Otherwise the chart is
/// still produced (unamplified) and the encoding is left out.
///
pub fn search_report(raw_target: &str, strict: bool) -> Result<SearchReport> {
    let target = GeneticSequence::from_input(raw_target);

    let oracle = match OraclePlan::for_target(target.as_str()) {
        Ok(plan) => Some(plan),
        Err(e) if strict => {
            return Err(e).with_context(|| format!("Cannot search for target '{}'", target));
        }
        Err(e) => {
            warn!("Please enter a valid 2-base sequence using A, C, G, or T ({})", e);
            None
        }
    };

    Ok(SearchReport {
        amplitudes: mock_amplitudes(target.as_str()),
        target,
        oracle,
    })
}

pub fn render_search_text(report: &SearchReport) -> String {
    let mut lines = Vec::new();

    match &report.oracle {
        Some(plan) => {
            lines.push(format!("Target: {}", plan.target));
            lines.push(format!("Qubit Binary: {}", plan.ket()));
        }
        None => lines.push(format!("Target: {} (not encodable)", report.target)),
    }

    lines.push("Probability Amplitude (After Grover Iteration):".to_string());
    for entry in report.amplitudes.iter() {
        lines.push(format!("  {}  {:.2}", entry.sequence, entry.probability));
    }

    lines.join("\n")
}

pub fn run_search(matches: &ArgMatches, config: &DashboardConfig) -> Result<()> {
    let target = matches
        .get_one::<String>("target")
        .map(String::as_str)
        .unwrap_or(config.target());
    let strict = matches.get_flag("strict");

    let report = search_report(target, strict)?;

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", render_search_text(&report));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_search_report_normalizes_target() {
        let report = search_report(" at ", true).unwrap();
        assert_eq!(report.target.as_str(), "AT");
        assert_eq!(report.oracle.as_ref().unwrap().binary_target, "0011");
        assert_eq!(report.amplitudes.get("AT"), Some(0.6));

        let text = render_search_text(&report);
        assert!(text.starts_with("Target: AT\nQubit Binary: |0011>"));
        assert!(text.contains("  AT  0.60"));
        assert!(text.contains("  TT  0.03"));
    }

    #[rstest]
    #[case("ZZ")]
    #[case("ACG")]
    fn test_invalid_target_is_lenient_by_default(#[case] target: &str) {
        let report = search_report(target, false).unwrap();
        assert!(report.oracle.is_none());
        assert!(report.amplitudes.iter().all(|e| e.probability == 0.03));
        assert!(render_search_text(&report).contains("(not encodable)"));
    }

    #[rstest]
    fn test_invalid_target_fails_in_strict_mode() {
        let err = search_report("ZZ", true).unwrap_err();
        assert!(err.to_string().contains("Cannot search for target 'ZZ'"));
    }
}
