use std::fmt::{Display, Formatter};

use comfy_table::Color;
use serde::{Deserialize, Serialize};

/// Coarse lighting technology.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "LED")]
    Led,

    /// High-pressure sodium, metal halide, mercury vapour and anything else that is not LED.
    Discharge,
}

impl Category {
    /// Classify a free-text technology label.
    ///
    /// Anything that does not mention `LED` falls back to [`Category::Discharge`].
    pub fn classify(technology: &str) -> Self {
        if technology.contains("LED") { Self::Led } else { Self::Discharge }
    }

    /// Nominal lumens per watt of average power draw.
    pub const fn light_output_factor(self) -> f64 {
        match self {
            Self::Led => 2.5,
            Self::Discharge => 1.1,
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Led => "LED",
            Self::Discharge => "Discharge",
        }
    }

    pub const fn color(self) -> Color {
        match self {
            Self::Led => Color::Green,
            Self::Discharge => Color::DarkYellow,
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Category selection of the presentation tabs.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, clap::ValueEnum, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,

    #[serde(rename = "LED")]
    Led,

    Discharge,
}

impl CategoryFilter {
    pub const fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Led => matches!(category, Category::Led),
            Self::Discharge => matches!(category, Category::Discharge),
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        match category {
            Category::Led => Self::Led,
            Category::Discharge => Self::Discharge,
        }
    }
}

impl Display for CategoryFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Led => Category::Led.fmt(f),
            Self::Discharge => Category::Discharge.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(Category::classify("LED 60W"), Category::Led);
        assert_eq!(Category::classify("Lanterne LED"), Category::Led);
        assert_eq!(Category::classify("SHP 150W"), Category::Discharge);
        assert_eq!(Category::classify(""), Category::Discharge);
    }

    #[test]
    fn test_classify_is_case_sensitive() {
        assert_eq!(Category::classify("led"), Category::Discharge);
    }

    #[test]
    fn test_filter_matches() {
        assert!(CategoryFilter::All.matches(Category::Led));
        assert!(CategoryFilter::All.matches(Category::Discharge));
        assert!(CategoryFilter::Led.matches(Category::Led));
        assert!(!CategoryFilter::Led.matches(Category::Discharge));
        assert!(!CategoryFilter::Discharge.matches(Category::Led));
    }
}
