use clap::Parser;
use serde::Serialize;

use crate::{
    cli::source::SourceArgs,
    core::{
        bucket::LightingTypeBucket,
        category::CategoryFilter,
        dashboard::Dashboard,
        filter::{average_nightly_consumption, efficiency},
        granularity::Granularity,
        series::PeriodPoint,
        totals::Totals,
    },
    prelude::*,
    quantity::{cost::KilowattHourRate, energy::KilowattHours, light::Efficacy},
    tables::{build_buckets_table, build_series_table, build_totals_table},
};

#[derive(Parser)]
pub struct EstimateArgs {
    #[clap(flatten)]
    pub source: SourceArgs,

    /// Restrict the fleet to a single location and group it by technology and ballast.
    #[clap(long, env = "LOCATION")]
    pub location: Option<String>,

    #[clap(long, value_enum, default_value_t, env = "GRANULARITY")]
    pub granularity: Granularity,

    /// Energy price, currency units per kilowatt-hour.
    #[clap(long = "tariff", default_value = "94", env = "TARIFF")]
    pub tariff: KilowattHourRate,

    /// Category to show the series and totals for.
    #[clap(long, value_enum, default_value_t)]
    pub category: CategoryFilter,

    #[clap(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[derive(Copy, Clone, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables.
    #[default]
    Table,

    /// Machine-readable report for the chart consumers.
    Json,
}

#[instrument(skip_all)]
pub async fn estimate(args: &EstimateArgs) -> Result {
    let dashboard = Dashboard::builder()
        .fixtures(args.source.load().await)
        .maybe_location(args.location.clone())
        .granularity(args.granularity)
        .tariff(args.tariff)
        .build();

    match args.format {
        OutputFormat::Table => {
            let buckets = dashboard.buckets();
            println!("{}", build_buckets_table(buckets));
            println!("{}", build_series_table(&dashboard.filtered_series(args.category), buckets));
            println!("{}", build_totals_table(&dashboard.filtered_totals(args.category), buckets));
        }
        OutputFormat::Json => {
            let report = Report::new(&dashboard, args.category);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Report<'a> {
    granularity: Granularity,
    category: CategoryFilter,
    location: Option<&'a str>,
    tariff: KilowattHourRate,
    buckets: Vec<BucketSummary<'a>>,
    series: Vec<PeriodPoint>,
    totals: Totals,
}

impl<'a> Report<'a> {
    fn new(dashboard: &'a Dashboard, category: CategoryFilter) -> Self {
        Self {
            granularity: dashboard.granularity(),
            category,
            location: dashboard.location(),
            tariff: dashboard.tariff(),
            buckets: dashboard.buckets().iter().map(BucketSummary::from).collect(),
            series: dashboard.filtered_series(category),
            totals: dashboard.filtered_totals(category),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BucketSummary<'a> {
    #[serde(flatten)]
    bucket: &'a LightingTypeBucket,

    #[serde(rename = "efficiencyLumensPerWatt")]
    efficiency: Efficacy,

    #[serde(rename = "nightlyConsumptionKwh")]
    nightly_consumption: KilowattHours,
}

impl<'a> From<&'a LightingTypeBucket> for BucketSummary<'a> {
    fn from(bucket: &'a LightingTypeBucket) -> Self {
        Self {
            bucket,
            efficiency: efficiency(bucket),
            nightly_consumption: average_nightly_consumption(bucket),
        }
    }
}
