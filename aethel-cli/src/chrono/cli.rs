use clap::{Arg, ArgAction, Command, arg};

use crate::config::parse_gravity;

pub const CHRONO_CMD: &str = "chrono";

pub fn create_chrono_cli() -> Command {
    Command::new(CHRONO_CMD)
        .about("Fold an ancient DNA fragment under relativistic gravity and play its gene-song.")
        .arg(
            arg!(--species <SPECIES>)
                .required(false)
                .help("Ancestral genome, e.g. \"Woolly Mammoth\" (free text accepted)"),
        )
        .arg(
            arg!(--fragment <DNA>)
                .required(false)
                .help("DNA fragment; upper-cased before use"),
        )
        .arg(
            arg!(--gravity <G>)
                .required(false)
                .value_parser(parse_gravity)
                .help("Relativistic gravity intensity, 0 to 20 by convention"),
        )
        .arg(
            Arg::new("spiral")
                .long("spiral")
                .required(false)
                .value_parser(clap::value_parser!(usize))
                .help("Samples on the event-horizon trajectory [default: 500]"),
        )
        .arg(
            Arg::new("no-spiral")
                .long("no-spiral")
                .action(ArgAction::SetTrue)
                .conflicts_with("spiral")
                .help("Leave the event-horizon trajectory out of the report"),
        )
        .arg(
            arg!(--json)
                .help("Print the report as JSON")
                .action(ArgAction::SetTrue),
        )
}
