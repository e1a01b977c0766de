use clap::{Parser, crate_version};
use fleetlight::{
    cli::{Args, Command, estimate, list_fixtures},
    prelude::*,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().with_writer(std::io::stderr).init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Estimate(args) => estimate(&args).await?,
        Command::Fixtures(args) => list_fixtures(&args).await,
    }

    info!("done!");
    Ok(())
}
