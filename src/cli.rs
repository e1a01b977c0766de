mod estimate;
mod fixtures;
mod source;

use clap::{Parser, Subcommand};

pub use self::{estimate::estimate, fixtures::list_fixtures};
use crate::cli::{estimate::EstimateArgs, fixtures::FixturesArgs};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: project the fleet's energy consumption and cost.
    #[clap(name = "estimate")]
    Estimate(Box<EstimateArgs>),

    /// List the raw fixture records with their nightly operating duration.
    #[clap(name = "fixtures")]
    Fixtures(FixturesArgs),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;
    use crate::{
        core::{category::CategoryFilter, granularity::Granularity},
        prelude::*,
    };

    #[test]
    fn test_command() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_estimate_defaults() -> Result {
        let args =
            Args::try_parse_from(["fleetlight", "estimate", "--fixtures-file", "lamps.json"])?;
        let Command::Estimate(args) = args.command else {
            bail!("expected the estimate command");
        };
        assert_eq!(args.granularity, Granularity::Weekly);
        assert_eq!(args.category, CategoryFilter::All);
        assert!(args.location.is_none());
        Ok(())
    }

    #[test]
    fn test_estimate_options() -> Result {
        let args = Args::try_parse_from([
            "fleetlight",
            "estimate",
            "--equipment-api-url",
            "https://equipment.example.com/api/lamps",
            "--granularity",
            "yearly",
            "--category",
            "led",
            "--tariff",
            "110",
            "--location",
            "Dakar",
        ])?;
        let Command::Estimate(args) = args.command else {
            bail!("expected the estimate command");
        };
        assert_eq!(args.granularity, Granularity::Yearly);
        assert_eq!(args.category, CategoryFilter::Led);
        assert_eq!(args.location.as_deref(), Some("Dakar"));
        Ok(())
    }

    #[test]
    fn test_source_is_required() {
        assert!(Args::try_parse_from(["fleetlight", "fixtures"]).is_err());
    }

    #[test]
    fn test_sources_are_exclusive() {
        assert!(
            Args::try_parse_from([
                "fleetlight",
                "fixtures",
                "--fixtures-file",
                "lamps.json",
                "--equipment-api-url",
                "https://equipment.example.com/api/lamps",
            ])
            .is_err()
        );
    }
}
