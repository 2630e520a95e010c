mod chrono;
mod config;
mod origami;
mod search;

use std::path::Path;

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};

use config::DashboardConfig;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "aethel";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Quantum-biology dashboard computations: chrono-necro folding, mock Grover DNA search and HP lattice origami.")
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .help("TOML file with default inputs (species, fragment, gravity, target, protein)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count)
                .help("Log flavor events (-v) and computed values (-vv)"),
        )
        .subcommand(chrono::cli::create_chrono_cli())
        .subcommand(search::cli::create_search_cli())
        .subcommand(origami::cli::create_origami_cli())
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    init_logging(matches.get_count("verbose"));

    let config_path = matches.get_one::<String>("config");
    let config = DashboardConfig::load(config_path.map(Path::new))
        .with_context(|| format!("Failed to load config {:?}", config_path))?;

    match matches.subcommand() {
        //
        // CHRONO-NECRO FOLDING
        //
        Some((chrono::cli::CHRONO_CMD, matches)) => {
            chrono::handlers::run_chrono(matches, &config)?;
        }

        //
        // QUANTUM DNA SEARCH
        //
        Some((search::cli::SEARCH_CMD, matches)) => {
            search::handlers::run_search(matches, &config)?;
        }

        //
        // PROTEIN ORIGAMI
        //
        Some((origami::cli::ORIGAMI_CMD, matches)) => {
            origami::handlers::run_origami(matches, &config)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_parser_is_consistent() {
        build_parser().debug_assert();
    }

    #[rstest]
    fn test_global_args_after_subcommand() {
        let matches = build_parser()
            .try_get_matches_from(["aethel", "chrono", "--gravity", "4.5", "-vv", "--config", "dash.toml"])
            .unwrap();
        assert_eq!(matches.get_count("verbose"), 2);
        assert_eq!(matches.get_one::<String>("config").map(String::as_str), Some("dash.toml"));

        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, chrono::cli::CHRONO_CMD);
        assert_eq!(sub.get_one::<f64>("gravity"), Some(&4.5));
    }

    #[rstest]
    #[case(&["aethel", "chrono", "--gravity=-3"])]
    #[case(&["aethel", "chrono", "--gravity", "dense"])]
    #[case(&["aethel"])]
    fn test_rejected_invocations(#[case] args: &[&str]) {
        assert!(build_parser().try_get_matches_from(args).is_err());
    }

    #[rstest]
    fn test_negative_gravity_reaches_validator() {
        let err = build_parser()
            .try_get_matches_from(["aethel", "chrono", "--gravity=-3"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[rstest]
    fn test_search_flags() {
        let matches = build_parser()
            .try_get_matches_from(["aethel", "search", "--target", "cg", "--strict", "--json"])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        assert_eq!(sub.get_one::<String>("target").map(String::as_str), Some("cg"));
        assert!(sub.get_flag("strict"));
        assert!(sub.get_flag("json"));
    }
}
