use clap::{ArgAction, Command, arg};

pub const ORIGAMI_CMD: &str = "origami";

pub fn create_origami_cli() -> Command {
    Command::new(ORIGAMI_CMD)
        .about("Fold an HP-model protein chain onto the 2D lattice.")
        .arg(
            arg!(--sequence <HP>)
                .required(false)
                .help("Residues, H = hydrophobic and P = polar; upper-cased before use"),
        )
        .arg(
            arg!(--strict)
                .help("Fail unless the sequence is made of H and P only")
                .action(ArgAction::SetTrue),
        )
        .arg(
            arg!(--json)
                .help("Print the report as JSON")
                .action(ArgAction::SetTrue),
        )
}
