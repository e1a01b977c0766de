use std::collections::BTreeMap;

use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::core::{
    bucket::BucketId,
    category::Category,
    series::{BucketReading, PeriodPoint, Reading, find_bucket, serialize_flat_readings},
};

/// Cumulative energy and cost over a whole series, per bucket and per category.
#[must_use]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Totals {
    pub buckets: Vec<BucketReading>,
    pub categories: BTreeMap<Category, Reading>,
}

impl Totals {
    pub fn bucket(&self, bucket_id: BucketId) -> Option<Reading> {
        find_bucket(&self.buckets, bucket_id)
    }

    pub fn category(&self, category: Category) -> Option<Reading> {
        self.categories.get(&category).copied()
    }

    /// Sum of the category totals.
    pub fn overall(&self) -> Reading {
        self.categories.values().fold(Reading::default(), |total, reading| total + *reading)
    }
}

impl<'a> FromIterator<&'a PeriodPoint> for Totals {
    fn from_iter<T: IntoIterator<Item = &'a PeriodPoint>>(points: T) -> Self {
        let mut totals = Self::default();
        for point in points {
            for reading in &point.buckets {
                if let Some(total) =
                    totals.buckets.iter_mut().find(|total| total.bucket_id == reading.bucket_id)
                {
                    total.reading += reading.reading;
                } else {
                    totals.buckets.push(*reading);
                }
            }
            for (category, reading) in &point.categories {
                *totals.categories.entry(*category).or_default() += *reading;
            }
        }
        totals
    }
}

impl Serialize for Totals {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        serialize_flat_readings(&mut map, &self.buckets, &self.categories)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::{
        core::{bucket::LightingTypeBucket, granularity::Granularity, series::generate},
        quantity::{cost::KilowattHourRate, light::Lumens, power::Watts, time::Hours},
    };

    const TARIFF: KilowattHourRate = KilowattHourRate(94.0);

    fn bucket(id: u32, category: Category, average_power: f64) -> LightingTypeBucket {
        LightingTypeBucket {
            id: BucketId(id),
            name: category.to_string(),
            category,
            has_ballast: false,
            unit_count: 3,
            average_power: Watts(average_power),
            light_output: Lumens(average_power * category.light_output_factor()),
            nightly_duration: Hours(12.0),
            color: BucketId(id).color(),
        }
    }

    #[test]
    fn test_empty_series() {
        let totals = Vec::<PeriodPoint>::new().iter().collect::<Totals>();
        assert!(totals.buckets.is_empty());
        assert!(totals.categories.is_empty());
        assert_eq!(totals.overall(), Reading::default());
    }

    #[test]
    fn test_weekly_scenario() {
        let series =
            generate(&[bucket(1, Category::Discharge, 500.0)], Granularity::Weekly, TARIFF);
        let totals = series.iter().collect::<Totals>();
        let reading = totals.bucket(BucketId(1)).unwrap();
        assert_abs_diff_eq!(reading.energy.0, 126.0);
        assert_abs_diff_eq!(reading.cost.0, 11844.0);
        assert_eq!(totals.category(Category::Discharge), Some(reading));
    }

    #[test]
    fn test_bucket_totals_match_series_sums() {
        let buckets = [
            bucket(1, Category::Led, 63.0),
            bucket(2, Category::Discharge, 157.0),
            bucket(3, Category::Led, 91.0),
        ];
        for granularity in [
            Granularity::Daily,
            Granularity::Weekly,
            Granularity::Monthly,
            Granularity::Yearly,
        ] {
            let series = generate(&buckets, granularity, TARIFF);
            let totals = series.iter().collect::<Totals>();
            for bucket in &buckets {
                let cost: f64 =
                    series.iter().map(|point| point.bucket(bucket.id).unwrap().cost.0).sum();
                assert_abs_diff_eq!(totals.bucket(bucket.id).unwrap().cost.0, cost);
            }
            let overall = totals.overall();
            let led = totals.category(Category::Led).unwrap();
            let discharge = totals.category(Category::Discharge).unwrap();
            assert_abs_diff_eq!(overall.energy.0, led.energy.0 + discharge.energy.0);
        }
    }
}
