use chrono::{NaiveTime, Timelike};

use crate::{prelude::*, quantity::time::Hours};

/// Wall-clock switching time, minute resolution.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub struct ClockTime {
    hour: u32,
    minute: u32,
}

impl ClockTime {
    /// Parse `HH:MM`, tolerating a trailing `:SS` which is then ignored.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let time = NaiveTime::parse_from_str(text, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(text, "%H:%M:%S"))
            .ok()?;
        Some(Self { hour: time.hour(), minute: time.minute() })
    }
}

/// Nightly operating schedule of a fixture: switched on in the evening, off in the morning.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct OperatingSchedule {
    pub on: ClockTime,
    pub off: ClockTime,
}

impl OperatingSchedule {
    pub fn parse(on_time: Option<&str>, off_time: Option<&str>) -> Option<Self> {
        Some(Self { on: ClockTime::parse(on_time?)?, off: ClockTime::parse(off_time?)? })
    }

    /// Unrounded time between switching on and switching off.
    ///
    /// An off-time before the on-time means the lamp burns across midnight.
    pub fn duration(self) -> Hours {
        let minutes = (f64::from(self.off.minute) - f64::from(self.on.minute)) / 60.0;
        if self.off < self.on {
            Hours(24.0 - f64::from(self.on.hour) + f64::from(self.off.hour) + minutes)
        } else {
            Hours(f64::from(self.off.hour) - f64::from(self.on.hour) + minutes)
        }
    }
}

/// Unrounded nightly operating duration, used for displaying individual fixtures.
///
/// Missing or malformed times fall back to [`Hours::FALLBACK`].
pub fn nightly_duration(on_time: Option<&str>, off_time: Option<&str>) -> Hours {
    if let Some(schedule) = OperatingSchedule::parse(on_time, off_time) {
        schedule.duration()
    } else {
        warn!(?on_time, ?off_time, fallback = ?Hours::FALLBACK, "unusable operating schedule");
        Hours::FALLBACK
    }
}

/// Nightly operating duration rounded to whole hours, used by the lighting type buckets.
pub fn rounded_nightly_duration(on_time: Option<&str>, off_time: Option<&str>) -> Hours {
    nightly_duration(on_time, off_time).round()
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_same_day() {
        assert_abs_diff_eq!(nightly_duration(Some("08:00"), Some("17:30")).0, 9.5);
    }

    #[test]
    fn test_wraps_midnight() {
        assert_abs_diff_eq!(nightly_duration(Some("18:00"), Some("06:00")).0, 12.0);
        assert_abs_diff_eq!(nightly_duration(Some("18:45"), Some("06:15")).0, 11.5);
    }

    #[test]
    fn test_equal_times() {
        assert_abs_diff_eq!(nightly_duration(Some("19:00"), Some("19:00")).0, 0.0);
    }

    #[test]
    fn test_same_hour_earlier_minute_wraps() {
        assert_abs_diff_eq!(
            nightly_duration(Some("18:30"), Some("18:10")).0,
            24.0 - 20.0 / 60.0,
            epsilon = 1e-9,
        );
    }

    #[test]
    fn test_fallback() {
        assert_abs_diff_eq!(nightly_duration(None, Some("06:00")).0, 12.0);
        assert_abs_diff_eq!(nightly_duration(Some("18:00"), None).0, 12.0);
        assert_abs_diff_eq!(nightly_duration(Some("dusk"), Some("06:00")).0, 12.0);
        assert_abs_diff_eq!(nightly_duration(Some("25:00"), Some("06:00")).0, 12.0);
        assert_abs_diff_eq!(nightly_duration(Some("18:75"), Some("06:00")).0, 12.0);
    }

    #[test]
    fn test_seconds_are_ignored() {
        assert_abs_diff_eq!(nightly_duration(Some("18:00:59"), Some("06:00:00")).0, 12.0);
    }

    #[test]
    fn test_rounded() {
        assert_abs_diff_eq!(rounded_nightly_duration(Some("18:45"), Some("06:15")).0, 12.0);
        assert_abs_diff_eq!(rounded_nightly_duration(Some("19:20"), Some("06:00")).0, 11.0);
        assert_abs_diff_eq!(rounded_nightly_duration(None, None).0, 12.0);
    }
}
