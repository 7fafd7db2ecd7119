//! Reporting periods offered by the dashboard's time filter.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Closed set of periods the dashboard can be scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Period {
    ThisMonth,
    LastMonth,
    ThisQuarter,
    LastQuarter,
    #[default]
    ThisYear,
    LastYear,
}

impl Period {
    /// Menu order used by the period picker.
    pub const ALL: [Period; 6] = [
        Period::ThisMonth,
        Period::LastMonth,
        Period::ThisQuarter,
        Period::LastQuarter,
        Period::ThisYear,
        Period::LastYear,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Period::ThisMonth => "This month",
            Period::LastMonth => "Last month",
            Period::ThisQuarter => "This quarter",
            Period::LastQuarter => "Last quarter",
            Period::ThisYear => "This year",
            Period::LastYear => "Last year",
        }
    }

    /// Filename-friendly form of the label (`"This year"` -> `"this-year"`).
    pub fn slug(self) -> String {
        self.label()
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join("-")
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid time period: {0}")]
pub struct PeriodParseError(pub String);

impl FromStr for Period {
    type Err = PeriodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Period::ALL
            .into_iter()
            .find(|period| period.label() == s)
            .ok_or_else(|| PeriodParseError(s.to_string()))
    }
}

impl TryFrom<String> for Period {
    type Error = PeriodParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Period> for String {
    fn from(period: Period) -> Self {
        period.label().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_through_from_str() {
        for period in Period::ALL {
            assert_eq!(period.label().parse::<Period>(), Ok(period));
        }
    }

    #[test]
    fn unknown_labels_are_rejected() {
        let err = "Next decade".parse::<Period>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid time period: Next decade");
        assert!("this year".parse::<Period>().is_err());
        assert!("".parse::<Period>().is_err());
    }

    #[test]
    fn default_is_this_year() {
        assert_eq!(Period::default(), Period::ThisYear);
    }

    #[test]
    fn slug_lowercases_every_word() {
        assert_eq!(Period::LastQuarter.slug(), "last-quarter");
        assert_eq!(Period::ThisYear.slug(), "this-year");
    }

    #[test]
    fn deserialization_goes_through_validation() {
        let ok: Period = serde_json::from_str("\"Last month\"").unwrap();
        assert_eq!(ok, Period::LastMonth);
        assert!(serde_json::from_str::<Period>("\"Yesterday\"").is_err());
        assert_eq!(serde_json::to_string(&Period::ThisQuarter).unwrap(), "\"This quarter\"");
    }
}
