use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::{
    core::{category::Category, fixture::FixtureRecord},
    quantity::{light::Lumens, power::Watts, time::Hours},
};

/// Chart palette, assigned to the buckets in their display order.
const PALETTE: [&str; 8] =
    ["#8884d8", "#82ca9d", "#ffc658", "#ff7300", "#0088fe", "#00c49f", "#ffbb28", "#ff8042"];

/// Sequential display identifier, starting from 1.
#[derive(
    Copy, Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, derive_more::Display,
)]
#[serde(transparent)]
pub struct BucketId(pub u32);

impl BucketId {
    pub fn color(self) -> &'static str {
        PALETTE[(self.0.saturating_sub(1) as usize) % PALETTE.len()]
    }
}

/// Whether the fixtures come from all locations or from a single selected one.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum GroupingMode {
    /// Fleet-wide overview: at most one bucket per category.
    All,

    /// Single location: one bucket per technology and ballast pair.
    ByLocation,
}

#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub enum BucketKey {
    Category(Category),
    Technology { label: String, has_ballast: bool },
}

impl BucketKey {
    pub fn of(fixture: &FixtureRecord, mode: GroupingMode) -> Self {
        match mode {
            GroupingMode::All => Self::Category(fixture.category()),
            GroupingMode::ByLocation => Self::Technology {
                label: fixture.technology.clone(),
                has_ballast: fixture.has_ballast,
            },
        }
    }

    /// Human-readable bucket name.
    pub fn name(&self) -> String {
        match self {
            Self::Category(category) => category.to_string(),
            Self::Technology { label, has_ballast: true } => format!("{} + ballast", label.trim()),
            Self::Technology { label, has_ballast: false } => label.trim().to_owned(),
        }
    }
}

impl Display for BucketKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Category(category) => write!(f, "{category}"),
            Self::Technology { label, has_ballast } => write!(f, "{label}_{has_ballast}"),
        }
    }
}

/// Group of fixtures treated as one unit by the projections.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LightingTypeBucket {
    pub id: BucketId,
    pub name: String,
    pub category: Category,
    pub has_ballast: bool,

    /// Always at least one.
    pub unit_count: u32,

    /// Running mean over the fixtures with a known power draw.
    #[serde(rename = "averagePowerWatts")]
    pub average_power: Watts,

    /// Derived from the average power and the category.
    #[serde(rename = "lightOutputLumens")]
    pub light_output: Lumens,

    /// Whole hours, taken from the first fixture of the bucket.
    #[serde(rename = "nightlyDurationHours")]
    pub nightly_duration: Hours,

    pub color: &'static str,
}

impl LightingTypeBucket {
    /// Combined power draw of all the units.
    pub fn fleet_power(&self) -> Watts {
        self.average_power * f64::from(self.unit_count)
    }
}
