use std::collections::HashMap;

use crate::{
    core::{
        bucket::{BucketId, BucketKey, GroupingMode, LightingTypeBucket},
        category::Category,
        fixture::FixtureRecord,
        schedule::rounded_nightly_duration,
    },
    prelude::*,
    quantity::{Zero, light::Lumens, power::Watts, time::Hours},
};

/// Bucket under construction.
struct Accumulator {
    key: BucketKey,
    category: Category,
    has_ballast: bool,
    unit_count: u32,
    average_power: Watts,
    nightly_duration: Hours,
}

impl Accumulator {
    fn new(key: BucketKey, fixture: &FixtureRecord) -> Self {
        Self {
            key,
            category: fixture.category(),
            has_ballast: fixture.has_ballast,
            unit_count: 1,
            average_power: fixture.power.filter(|power| power.is_known()).unwrap_or(Watts::ZERO),
            nightly_duration: rounded_nightly_duration(
                fixture.on_time.as_deref(),
                fixture.off_time.as_deref(),
            ),
        }
    }

    /// Count the fixture in and update the running average power.
    ///
    /// Unknown power readings keep the average as it is.
    fn fold(&mut self, fixture: &FixtureRecord) {
        self.unit_count += 1;
        if let Some(power) = fixture.power.filter(|power| power.is_known()) {
            let n = f64::from(self.unit_count);
            self.average_power = (self.average_power * (n - 1.0) + power) / n;
        }
    }

    fn finish(self, id: BucketId) -> LightingTypeBucket {
        LightingTypeBucket {
            id,
            name: self.key.name(),
            category: self.category,
            has_ballast: self.has_ballast,
            unit_count: self.unit_count,
            average_power: self.average_power,
            light_output: Lumens(self.average_power.0 * self.category.light_output_factor()),
            nightly_duration: self.nightly_duration,
            color: id.color(),
        }
    }
}

/// Group the fixtures into lighting type buckets.
///
/// Buckets keep the order of their first fixture and get sequential identifiers.
#[instrument(skip_all, fields(n_fixtures = fixtures.len(), ?mode))]
pub fn aggregate(fixtures: &[FixtureRecord], mode: GroupingMode) -> Vec<LightingTypeBucket> {
    let mut indices = HashMap::<BucketKey, usize>::new();
    let mut accumulators = Vec::<Accumulator>::new();

    for fixture in fixtures {
        let key = BucketKey::of(fixture, mode);
        if let Some(&index) = indices.get(&key) {
            accumulators[index].fold(fixture);
        } else {
            indices.insert(key.clone(), accumulators.len());
            accumulators.push(Accumulator::new(key, fixture));
        }
    }

    debug!(n_buckets = accumulators.len(), "aggregated");
    accumulators
        .into_iter()
        .zip(1..)
        .map(|(accumulator, id)| accumulator.finish(BucketId(id)))
        .collect()
}
