use std::path::PathBuf;

use clap::{ArgGroup, Args};
use reqwest::Url;

use crate::{api::equipment, core::fixture::FixtureRecord, prelude::*};

#[derive(Args)]
#[group(skip)]
#[command(group(
    ArgGroup::new("source").required(true).args(["fixtures_file", "equipment_api_url"])
))]
pub struct SourceArgs {
    /// JSON snapshot of the equipment repository.
    #[clap(long, env = "FIXTURES_FILE")]
    pub fixtures_file: Option<PathBuf>,

    /// Equipment repository endpoint listing the lamps.
    #[clap(long, env = "EQUIPMENT_API_URL")]
    pub equipment_api_url: Option<Url>,

    /// Bearer token for the equipment repository.
    #[clap(long, env = "EQUIPMENT_API_TOKEN", hide_env_values = true)]
    pub equipment_api_token: Option<String>,
}

impl SourceArgs {
    /// Load the fixtures, treating any failure as an empty fleet.
    #[instrument(skip_all)]
    pub async fn load(&self) -> Vec<FixtureRecord> {
        match self.try_load().await {
            Ok(fixtures) => fixtures,
            Err(error) => {
                warn!("failed to load the fixtures, continuing with none: {error:#}");
                Vec::new()
            }
        }
    }

    async fn try_load(&self) -> Result<Vec<FixtureRecord>> {
        if let Some(path) = &self.fixtures_file {
            equipment::read_snapshot(path).await
        } else if let Some(url) = &self.equipment_api_url {
            equipment::Api::try_new(url.clone(), self.equipment_api_token.as_deref())?
                .get_fixtures()
                .await
        } else {
            bail!("neither a fixtures file nor an equipment API URL is specified")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::{dashboard::Dashboard, totals::Totals},
        quantity::cost::KilowattHourRate,
    };

    fn snapshot_args(path: PathBuf) -> SourceArgs {
        SourceArgs { fixtures_file: Some(path), equipment_api_url: None, equipment_api_token: None }
    }

    fn assert_empty(fixtures: Vec<FixtureRecord>) {
        assert!(fixtures.is_empty());
        let dashboard =
            Dashboard::builder().fixtures(fixtures).tariff(KilowattHourRate(94.0)).build();
        assert!(dashboard.buckets().is_empty());
        assert!(dashboard.series().is_empty());
        assert_eq!(*dashboard.totals(), Totals::default());
    }

    #[tokio::test]
    async fn test_missing_snapshot_is_empty_fleet() {
        let args = snapshot_args(PathBuf::from("/nonexistent/fleetlight-fixtures.json"));
        assert_empty(args.load().await);
    }

    #[tokio::test]
    async fn test_unparsable_snapshot_is_empty_fleet() -> Result {
        let path = std::env::temp_dir()
            .join(format!("fleetlight-unparsable-{}.json", std::process::id()));
        tokio::fs::write(&path, b"{not json").await?;
        let fixtures = snapshot_args(path.clone()).load().await;
        tokio::fs::remove_file(&path).await?;
        assert_empty(fixtures);
        Ok(())
    }

    #[tokio::test]
    async fn test_snapshot_is_loaded() -> Result {
        let path =
            std::env::temp_dir().join(format!("fleetlight-snapshot-{}.json", std::process::id()));
        // language=json
        tokio::fs::write(&path, br#"[{"id": 1, "technology": "LED 60W", "power": 60}]"#).await?;
        let fixtures = snapshot_args(path.clone()).load().await;
        tokio::fs::remove_file(&path).await?;
        assert_eq!(fixtures.len(), 1);
        Ok(())
    }
}
