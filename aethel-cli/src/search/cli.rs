use clap::{ArgAction, Command, arg};

pub const SEARCH_CMD: &str = "search";

pub fn create_search_cli() -> Command {
    Command::new(SEARCH_CMD)
        .about("Encode a 2-base DNA target onto qubits and show the mock Grover amplitudes.")
        .arg(
            arg!(--target <TARGET>)
                .required(false)
                .help("2-base DNA target, e.g. AT or CG; upper-cased before use"),
        )
        .arg(
            arg!(--strict)
                .help("Fail on an invalid target instead of showing the unamplified chart")
                .action(ArgAction::SetTrue),
        )
        .arg(
            arg!(--json)
                .help("Print the report as JSON")
                .action(ArgAction::SetTrue),
        )
}
