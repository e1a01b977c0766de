use std::fmt::{Display, Formatter};

use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnError, DefaultOnNull, DisplayFromStr, PickFirst, serde_as};

use crate::{core::category::Category, quantity::power::Watts};

/// Equipment repository identifiers come both as numbers and as strings.
#[derive(Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FixtureId {
    Number(u64),
    Text(String),
}

impl Display for FixtureId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{number}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<u64> for FixtureId {
    fn from(number: u64) -> Self {
        Self::Number(number)
    }
}

impl From<&str> for FixtureId {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

/// Single lamp as supplied by the equipment repository.
#[serde_as]
#[must_use]
#[derive(Clone, Debug, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
pub struct FixtureRecord {
    #[builder(into)]
    pub id: FixtureId,

    /// Free-text lamp technology, for example `LED 60W` or `SHP 150W`.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(alias = "lampType", alias = "technologyLabel", default)]
    #[builder(into, default)]
    pub technology: String,

    #[serde_as(as = "DefaultOnNull")]
    #[serde(alias = "ballast", default)]
    #[builder(default)]
    pub has_ballast: bool,

    /// Some repository versions serialize the power as a string.
    /// Unreadable values (`""`, `"n/a"`) count as unknown.
    #[serde_as(as = "DefaultOnError<Option<PickFirst<(_, DisplayFromStr)>>>")]
    #[serde(alias = "powerWatts", default)]
    pub power: Option<Watts>,

    /// `HH:MM`.
    #[builder(into)]
    pub on_time: Option<String>,

    /// `HH:MM`.
    #[builder(into)]
    pub off_time: Option<String>,

    #[serde(alias = "municipality")]
    #[builder(into)]
    pub location: Option<String>,
}

impl FixtureRecord {
    pub fn category(&self) -> Category {
        Category::classify(&self.technology)
    }

    /// Check whether the fixture is installed at the location, ignoring case and padding.
    pub fn is_located_in(&self, location: &str) -> bool {
        self.location
            .as_deref()
            .is_some_and(|own| own.trim().to_lowercase() == location.trim().to_lowercase())
    }
}
