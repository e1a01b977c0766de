use bon::bon;

use crate::{
    core::{
        aggregator::aggregate,
        bucket::{GroupingMode, LightingTypeBucket},
        category::CategoryFilter,
        filter::{filter_series, filter_totals},
        fixture::FixtureRecord,
        granularity::Granularity,
        series::{PeriodPoint, generate},
        totals::Totals,
    },
    prelude::*,
    quantity::cost::KilowattHourRate,
};

/// Input snapshot and everything derived from it.
///
/// Every setter recomputes the derived state before returning, so readers never observe
/// buckets, series and totals from different inputs.
#[must_use]
pub struct Dashboard {
    fixtures: Vec<FixtureRecord>,
    location: Option<String>,
    granularity: Granularity,
    tariff: KilowattHourRate,

    buckets: Vec<LightingTypeBucket>,
    series: Vec<PeriodPoint>,
    totals: Totals,
}

#[bon]
impl Dashboard {
    #[builder]
    pub fn new(
        fixtures: Vec<FixtureRecord>,
        #[builder(into)] location: Option<String>,
        #[builder(default)] granularity: Granularity,
        tariff: KilowattHourRate,
    ) -> Self {
        let mut this = Self {
            fixtures,
            location,
            granularity,
            tariff,
            buckets: Vec::new(),
            series: Vec::new(),
            totals: Totals::default(),
        };
        this.recompute();
        this
    }
}

impl Dashboard {
    pub fn set_fixtures(&mut self, fixtures: Vec<FixtureRecord>) {
        self.fixtures = fixtures;
        self.recompute();
    }

    /// Select a single location, or all of them with [`None`].
    pub fn set_location(&mut self, location: Option<String>) {
        self.location = location;
        self.recompute();
    }

    pub fn set_granularity(&mut self, granularity: Granularity) {
        self.granularity = granularity;
        self.recompute();
    }

    pub fn set_tariff(&mut self, tariff: KilowattHourRate) {
        self.tariff = tariff;
        self.recompute();
    }

    pub const fn granularity(&self) -> Granularity {
        self.granularity
    }

    pub const fn tariff(&self) -> KilowattHourRate {
        self.tariff
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn buckets(&self) -> &[LightingTypeBucket] {
        &self.buckets
    }

    pub fn series(&self) -> &[PeriodPoint] {
        &self.series
    }

    pub const fn totals(&self) -> &Totals {
        &self.totals
    }

    pub fn filtered_series(&self, filter: CategoryFilter) -> Vec<PeriodPoint> {
        filter_series(&self.series, filter)
    }

    pub fn filtered_totals(&self, filter: CategoryFilter) -> Totals {
        filter_totals(&self.totals, filter)
    }

    #[instrument(skip_all, fields(location = self.location.as_deref(), granularity = %self.granularity))]
    fn recompute(&mut self) {
        self.buckets = if let Some(location) = &self.location {
            let fixtures: Vec<FixtureRecord> = self
                .fixtures
                .iter()
                .filter(|fixture| fixture.is_located_in(location))
                .cloned()
                .collect();
            info!(n_fixtures = fixtures.len(), "fixtures at the location");
            aggregate(&fixtures, GroupingMode::ByLocation)
        } else {
            aggregate(&self.fixtures, GroupingMode::All)
        };
        self.series = generate(&self.buckets, self.granularity, self.tariff);
        self.totals = self.series.iter().collect();
        let overall = self.totals.overall();
        info!(
            n_buckets = self.buckets.len(),
            n_points = self.series.len(),
            energy = %overall.energy,
            cost = %overall.cost,
            "recomputed",
        );
    }
}
