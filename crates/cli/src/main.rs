//! Soldier stat distribution sampler.
//!
//! Generates batches of soldiers with the stat-swap engine and prints their
//! stat distributions. Run with: `barracks <command>`

mod commands;
mod inputs;
mod logging;
mod render;

use anyhow::Result;
use clap::Parser;
use commands::{Compare, Profiles, Sample};

/// Sample LWOTC soldier stat distributions
#[derive(Parser)]
#[command(name = "barracks")]
#[command(about = "Sample randomized soldier stats", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Generate soldiers and show per-stat distributions
    Sample(Sample),

    /// Compare stat distributions across profiles
    Compare(Compare),

    /// List available generation profiles
    Profiles(Profiles),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for BARRACKS_SEED and friends)
    let _ = dotenvy::dotenv();

    logging::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Sample(cmd) => cmd.execute(),
        Command::Compare(cmd) => cmd.execute(),
        Command::Profiles(cmd) => cmd.execute(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_sample_arguments() {
        let cli = Cli::try_parse_from([
            "barracks", "sample", "-n", "500", "--profile", "indep", "--rolls", "4d6", "--totals",
            "--seed", "42", "--format", "csv",
        ])
        .unwrap();

        let Command::Sample(sample) = cli.command else {
            panic!("expected sample command");
        };
        assert_eq!(sample.number, 500);
        assert_eq!(sample.profile, "indep");
        assert_eq!(sample.rolls.unwrap().to_string(), "4d6");
        assert!(sample.totals);
        assert_eq!(sample.seed, Some(42));
        assert_eq!(sample.format, render::OutputFormat::Csv);
    }

    #[test]
    fn rejects_malformed_rolls() {
        let result = Cli::try_parse_from(["barracks", "sample", "-n", "5", "--rolls", "5x4"]);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_zero_totals_bins() {
        let result = Cli::try_parse_from(["barracks", "sample", "-n", "5", "--totals", "--bins", "0"]);
        assert!(result.is_err());

        let cli = Cli::try_parse_from(["barracks", "sample", "-n", "5", "--bins", "1"]).unwrap();
        let Command::Sample(sample) = cli.command else {
            panic!("expected sample command");
        };
        assert_eq!(sample.bins, 1);
    }

    #[test]
    fn rejects_oversized_dice_pool() {
        let result = Cli::try_parse_from(["barracks", "sample", "-n", "5", "--rolls", "4000000000d4"]);
        assert!(result.is_err());
    }

    #[test]
    fn compare_takes_profile_list() {
        let cli = Cli::try_parse_from(["barracks", "compare", "-n", "10", "lwotc", "ance"]).unwrap();
        let Command::Compare(compare) = cli.command else {
            panic!("expected compare command");
        };
        assert_eq!(compare.profiles, vec!["lwotc", "ance"]);
    }
}
