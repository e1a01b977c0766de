use std::{
    fmt::{Display, Formatter},
    iter,
};

use chrono::{Month, Weekday};
use serde::{Deserialize, Serialize};

use crate::{
    core::bucket::LightingTypeBucket,
    quantity::{Zero, energy::KilowattHours, time::Hours},
};

/// Nights per projected month.
const NIGHTS_PER_MONTH: f64 = 30.0;

/// Days listed by the monthly projection.
const DAYS_PER_MONTH: u32 = 30;

/// Cold-season uplift of the yearly projection.
const COLD_SEASON_FACTOR: f64 = 1.2;

/// Time resolution of the projected series.
#[derive(
    Copy, Clone, Debug, Default, Hash, Eq, PartialEq, clap::ValueEnum, Serialize, Deserialize,
)]
pub enum Granularity {
    /// 24 hourly slots of a single night.
    Daily,

    /// Seven days, Monday to Sunday.
    #[default]
    Weekly,

    /// Thirty days.
    Monthly,

    /// Twelve months, January to December.
    Yearly,
}

impl Granularity {
    pub fn slots(self) -> Vec<Slot> {
        match self {
            Self::Daily => (0..24).map(Slot::Hour).collect(),
            Self::Weekly => {
                iter::successors(Some(Weekday::Mon), |weekday| Some(weekday.succ()))
                    .take(7)
                    .map(Slot::Weekday)
                    .collect()
            }
            Self::Monthly => (1..=DAYS_PER_MONTH).map(Slot::Day).collect(),
            Self::Yearly => {
                (1..=12_u8).filter_map(|number| Month::try_from(number).ok()).map(Slot::Month).collect()
            }
        }
    }
}

impl Display for Granularity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Daily => f.write_str("Daily"),
            Self::Weekly => f.write_str("Weekly"),
            Self::Monthly => f.write_str("Monthly"),
            Self::Yearly => f.write_str("Yearly"),
        }
    }
}

/// Single point of the projected series.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Slot {
    /// Hour of the day, `0..24`.
    Hour(u32),

    Weekday(Weekday),

    /// Day of the month, starting from 1.
    Day(u32),

    Month(Month),
}

impl Slot {
    /// Hours from 18:00 to 06:59, inclusive.
    pub const fn is_night_hour(hour: u32) -> bool {
        hour >= 18 || hour <= 6
    }

    /// October through March.
    pub fn seasonal_factor(month: Month) -> f64 {
        let number = month.number_from_month();
        if number >= 10 || number <= 3 { COLD_SEASON_FACTOR } else { 1.0 }
    }

    pub fn label(self) -> String {
        match self {
            Self::Hour(hour) => format!("{hour}h"),
            Self::Weekday(weekday) => weekday.to_string(),
            Self::Day(day) => day.to_string(),
            Self::Month(month) => month.name().chars().take(3).collect(),
        }
    }

    /// Projected consumption of the bucket within the slot, rounded to whole kilowatt-hours.
    ///
    /// The hourly slot counts a single hour of the fleet power, regardless of the bucket's
    /// nightly duration.
    pub fn consumption(self, bucket: &LightingTypeBucket) -> KilowattHours {
        let fleet_power = bucket.fleet_power();
        let consumption = match self {
            Self::Hour(hour) if Self::is_night_hour(hour) => fleet_power * Hours(1.0),
            Self::Hour(_) => KilowattHours::ZERO,
            Self::Weekday(_) | Self::Day(_) => fleet_power * bucket.nightly_duration,
            Self::Month(month) => {
                fleet_power
                    * bucket.nightly_duration
                    * (NIGHTS_PER_MONTH * Self::seasonal_factor(month))
            }
        };
        consumption.round()
    }
}

impl Display for Slot {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::{
        core::{bucket::BucketId, category::Category},
        quantity::{light::Lumens, power::Watts},
    };

    fn bucket(average_power: f64, unit_count: u32, nightly_duration: f64) -> LightingTypeBucket {
        LightingTypeBucket {
            id: BucketId(1),
            name: "SHP 150W".to_owned(),
            category: Category::Discharge,
            has_ballast: true,
            unit_count,
            average_power: Watts(average_power),
            light_output: Lumens(average_power * 1.1),
            nightly_duration: Hours(nightly_duration),
            color: BucketId(1).color(),
        }
    }

    #[test]
    fn test_slot_counts() {
        assert_eq!(Granularity::Daily.slots().len(), 24);
        assert_eq!(Granularity::Weekly.slots().len(), 7);
        assert_eq!(Granularity::Monthly.slots().len(), 30);
        assert_eq!(Granularity::Yearly.slots().len(), 12);
    }

    #[test]
    fn test_labels() {
        let labels = |granularity: Granularity| {
            granularity.slots().into_iter().map(Slot::label).collect::<Vec<_>>()
        };
        assert_eq!(labels(Granularity::Daily)[..3], ["0h", "1h", "2h"]);
        assert_eq!(labels(Granularity::Daily)[23], "23h");
        assert_eq!(labels(Granularity::Weekly), ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
        assert_eq!(labels(Granularity::Monthly)[29], "30");
        assert_eq!(labels(Granularity::Yearly)[..2], ["Jan", "Feb"]);
        assert_eq!(labels(Granularity::Yearly)[11], "Dec");
    }

    #[test]
    fn test_seasonal_factor() {
        for month in [Month::October, Month::December, Month::January, Month::March] {
            assert_abs_diff_eq!(Slot::seasonal_factor(month), 1.2);
        }
        for month in [Month::April, Month::July, Month::September] {
            assert_abs_diff_eq!(Slot::seasonal_factor(month), 1.0);
        }
    }

    #[test]
    fn test_weekly_consumption() {
        let bucket = bucket(500.0, 3, 12.0);
        assert_abs_diff_eq!(Slot::Weekday(Weekday::Wed).consumption(&bucket).0, 18.0);
        assert_abs_diff_eq!(Slot::Day(17).consumption(&bucket).0, 18.0);
    }

    #[test]
    fn test_yearly_consumption() {
        let bucket = bucket(500.0, 3, 12.0);
        assert_abs_diff_eq!(Slot::Month(Month::October).consumption(&bucket).0, 648.0);
        assert_abs_diff_eq!(Slot::Month(Month::July).consumption(&bucket).0, 540.0);
    }

    #[test]
    fn test_daily_consumption_counts_night_hours_only() {
        let bucket = bucket(500.0, 3, 12.0);
        assert_abs_diff_eq!(Slot::Hour(18).consumption(&bucket).0, 2.0);
        assert_abs_diff_eq!(Slot::Hour(6).consumption(&bucket).0, 2.0);
        assert_abs_diff_eq!(Slot::Hour(7).consumption(&bucket).0, 0.0);
        assert_abs_diff_eq!(Slot::Hour(17).consumption(&bucket).0, 0.0);
    }

    #[test]
    fn test_daily_consumption_of_small_bucket_rounds_to_zero() {
        let bucket = bucket(60.0, 2, 12.0);
        assert_abs_diff_eq!(Slot::Hour(22).consumption(&bucket).0, 0.0);
        assert_abs_diff_eq!(Slot::Weekday(Weekday::Mon).consumption(&bucket).0, 1.0);
    }
}
