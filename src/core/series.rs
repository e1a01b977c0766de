use std::collections::BTreeMap;

use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::{
    core::{
        bucket::{BucketId, LightingTypeBucket},
        category::Category,
        granularity::Granularity,
    },
    prelude::*,
    quantity::{
        cost::{Cost, KilowattHourRate},
        energy::KilowattHours,
    },
};

/// Energy and its cost.
#[derive(Copy, Clone, Debug, Default, PartialEq, derive_more::Add, derive_more::AddAssign)]
pub struct Reading {
    pub energy: KilowattHours,
    pub cost: Cost,
}

impl Reading {
    /// Price the energy and round the cost to whole currency units.
    pub fn priced(energy: KilowattHours, tariff: KilowattHourRate) -> Self {
        Self { energy, cost: (energy * tariff).round() }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BucketReading {
    pub bucket_id: BucketId,
    pub category: Category,
    pub reading: Reading,
}

/// Single time slot of the projection.
#[must_use]
#[derive(Clone, Debug, PartialEq)]
pub struct PeriodPoint {
    pub label: String,

    /// Per-bucket readings, in the bucket order.
    pub buckets: Vec<BucketReading>,

    /// Subtotals of the categories present among the buckets.
    pub categories: BTreeMap<Category, Reading>,
}

impl PeriodPoint {
    pub fn bucket(&self, bucket_id: BucketId) -> Option<Reading> {
        find_bucket(&self.buckets, bucket_id)
    }

    pub fn category(&self, category: Category) -> Option<Reading> {
        self.categories.get(&category).copied()
    }
}

impl Serialize for PeriodPoint {
    /// Flat chart-friendly record: `label`, `energy_<bucket>`, `cost_<bucket>`,
    /// `energy_<category>` and `cost_<category>`.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("label", &self.label)?;
        serialize_flat_readings(&mut map, &self.buckets, &self.categories)?;
        map.end()
    }
}

pub(super) fn find_bucket(buckets: &[BucketReading], bucket_id: BucketId) -> Option<Reading> {
    buckets.iter().find(|reading| reading.bucket_id == bucket_id).map(|reading| reading.reading)
}

pub(super) fn serialize_flat_readings<M: SerializeMap>(
    map: &mut M,
    buckets: &[BucketReading],
    categories: &BTreeMap<Category, Reading>,
) -> Result<(), M::Error> {
    for bucket in buckets {
        map.serialize_entry(&format!("energy_{}", bucket.bucket_id), &bucket.reading.energy)?;
        map.serialize_entry(&format!("cost_{}", bucket.bucket_id), &bucket.reading.cost)?;
    }
    for (category, reading) in categories {
        map.serialize_entry(&format!("energy_{category}"), &reading.energy)?;
        map.serialize_entry(&format!("cost_{category}"), &reading.cost)?;
    }
    Ok(())
}

/// Project the buckets' consumption and cost over the granularity's time slots.
///
/// No buckets, no points.
#[instrument(skip_all, fields(n_buckets = buckets.len(), %granularity, %tariff))]
pub fn generate(
    buckets: &[LightingTypeBucket],
    granularity: Granularity,
    tariff: KilowattHourRate,
) -> Vec<PeriodPoint> {
    if buckets.is_empty() {
        return Vec::new();
    }
    let series: Vec<PeriodPoint> = granularity
        .slots()
        .into_iter()
        .map(|slot| {
            let mut categories = BTreeMap::<Category, Reading>::new();
            let buckets = buckets
                .iter()
                .map(|bucket| {
                    let reading = Reading::priced(slot.consumption(bucket), tariff);
                    *categories.entry(bucket.category).or_default() += reading;
                    BucketReading { bucket_id: bucket.id, category: bucket.category, reading }
                })
                .collect();
            PeriodPoint { label: slot.label(), buckets, categories }
        })
        .collect();
    debug!(n_points = series.len(), "generated");
    series
}
