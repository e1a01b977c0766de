use clap::Parser;

use crate::{cli::source::SourceArgs, prelude::*, tables::build_fixtures_table};

#[derive(Parser)]
pub struct FixturesArgs {
    #[clap(flatten)]
    pub source: SourceArgs,

    /// Only list the fixtures at the location.
    #[clap(long, env = "LOCATION")]
    pub location: Option<String>,
}

#[instrument(skip_all)]
pub async fn list_fixtures(args: &FixturesArgs) {
    let mut fixtures = args.source.load().await;
    if let Some(location) = &args.location {
        fixtures.retain(|fixture| fixture.is_located_in(location));
    }
    info!(n_fixtures = fixtures.len(), "listing");
    println!("{}", build_fixtures_table(&fixtures));
}
