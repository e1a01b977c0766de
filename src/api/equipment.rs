use std::{path::Path, time::Duration};

use reqwest::{
    Client,
    ClientBuilder,
    Url,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};
use serde::Deserialize;

use crate::{core::fixture::FixtureRecord, prelude::*};

/// Equipment repository REST API.
pub struct Api {
    client: Client,
    url: Url,
}

impl Api {
    pub fn try_new(url: Url, access_token: Option<&str>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        if let Some(access_token) = access_token {
            headers.insert(AUTHORIZATION, HeaderValue::from_str(&format!("Bearer {access_token}"))?);
        }
        let client = ClientBuilder::new()
            .default_headers(headers)
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self { client, url })
    }

    #[instrument(skip_all, fields(url = %self.url))]
    pub async fn get_fixtures(&self) -> Result<Vec<FixtureRecord>> {
        let response: FixturesResponse = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .with_context(|| format!("failed to request the fixtures from `{}`", self.url))?
            .error_for_status()?
            .json()
            .await
            .with_context(|| format!("failed to deserialize the response from `{}`", self.url))?;
        let fixtures = response.into_fixtures();
        info!(n_fixtures = fixtures.len(), "fetched");
        Ok(fixtures)
    }
}

/// Read a JSON snapshot of the equipment repository.
#[instrument(skip_all, fields(path = %path.display()))]
pub async fn read_snapshot(path: &Path) -> Result<Vec<FixtureRecord>> {
    let contents = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read `{}`", path.display()))?;
    let fixtures = serde_json::from_slice::<FixturesResponse>(&contents)
        .with_context(|| format!("failed to parse `{}`", path.display()))?
        .into_fixtures();
    info!(n_fixtures = fixtures.len(), "loaded");
    Ok(fixtures)
}

/// The repository answers either with a bare array or with a `data` envelope.
#[derive(Deserialize)]
#[serde(untagged)]
enum FixturesResponse {
    Bare(Vec<FixtureRow>),
    Enveloped { data: Vec<FixtureRow> },
}

/// Single row of the response, kept as raw JSON when it is not a fixture at all.
#[derive(Deserialize)]
#[serde(untagged)]
enum FixtureRow {
    Fixture(FixtureRecord),
    Malformed(serde_json::Value),
}

impl FixturesResponse {
    fn into_fixtures(self) -> Vec<FixtureRecord> {
        let (Self::Bare(rows) | Self::Enveloped { data: rows }) = self;
        rows.into_iter()
            .filter_map(|row| match row {
                FixtureRow::Fixture(fixture) => Some(fixture),
                FixtureRow::Malformed(value) => {
                    warn!(%value, "skipping a malformed fixture");
                    None
                }
            })
            .collect()
    }
}
