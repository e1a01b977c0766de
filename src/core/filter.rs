//! Category-scoped views and per-bucket figures for the presentation layer.

use itertools::Itertools;

use crate::{
    core::{
        bucket::LightingTypeBucket,
        category::CategoryFilter,
        series::{BucketReading, PeriodPoint},
        totals::Totals,
    },
    quantity::{Zero, energy::KilowattHours, light::Efficacy, power::Watts},
};

fn retain_buckets(buckets: &[BucketReading], filter: CategoryFilter) -> Vec<BucketReading> {
    buckets.iter().filter(|reading| filter.matches(reading.category)).copied().collect_vec()
}

/// Keep only the bucket readings and the subtotal of the selected category.
pub fn filter_series(series: &[PeriodPoint], filter: CategoryFilter) -> Vec<PeriodPoint> {
    if filter == CategoryFilter::All {
        return series.to_vec();
    }
    series
        .iter()
        .map(|point| PeriodPoint {
            label: point.label.clone(),
            buckets: retain_buckets(&point.buckets, filter),
            categories: point
                .categories
                .iter()
                .filter(|(category, _)| filter.matches(**category))
                .map(|(category, reading)| (*category, *reading))
                .collect(),
        })
        .collect()
}

/// Same inclusion rule as [`filter_series`], applied to the totals.
pub fn filter_totals(totals: &Totals, filter: CategoryFilter) -> Totals {
    if filter == CategoryFilter::All {
        return totals.clone();
    }
    Totals {
        buckets: retain_buckets(&totals.buckets, filter),
        categories: totals
            .categories
            .iter()
            .filter(|(category, _)| filter.matches(**category))
            .map(|(category, reading)| (*category, *reading))
            .collect(),
    }
}

/// Unrounded energy drawn by a single unit of the bucket per night.
pub fn average_nightly_consumption(bucket: &LightingTypeBucket) -> KilowattHours {
    bucket.average_power * bucket.nightly_duration
}

/// Light output per watt, zero for buckets without a known power draw.
pub fn efficiency(bucket: &LightingTypeBucket) -> Efficacy {
    if bucket.average_power == Watts::ZERO {
        Efficacy::ZERO
    } else {
        bucket.light_output / bucket.average_power
    }
}
