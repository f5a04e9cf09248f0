//! Viewing-window types shared by the resolver and the store.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::PulseError;

/// Named, clock-relative windows plus the explicit custom range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum PeriodPreset {
    #[default]
    ThisMonth,
    LastMonth,
    YearToDate,
    Custom,
}

impl PeriodPreset {
    pub const ALL: [PeriodPreset; 4] = [
        PeriodPreset::ThisMonth,
        PeriodPreset::LastMonth,
        PeriodPreset::YearToDate,
        PeriodPreset::Custom,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            PeriodPreset::ThisMonth => "this_month",
            PeriodPreset::LastMonth => "last_month",
            PeriodPreset::YearToDate => "year_to_date",
            PeriodPreset::Custom => "custom",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PeriodPreset::ThisMonth => "This month",
            PeriodPreset::LastMonth => "Last month",
            PeriodPreset::YearToDate => "Year to date",
            PeriodPreset::Custom => "Custom range",
        }
    }
}

impl fmt::Display for PeriodPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for PeriodPreset {
    type Err = PulseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "this_month" | "month" => Ok(PeriodPreset::ThisMonth),
            "last_month" => Ok(PeriodPreset::LastMonth),
            "year_to_date" | "ytd" => Ok(PeriodPreset::YearToDate),
            "custom" => Ok(PeriodPreset::Custom),
            _ => Err(PulseError::InvalidInput(format!(
                "unknown period preset `{}`",
                raw.trim()
            ))),
        }
    }
}

/// Inclusive `[start, end]` range as ISO-8601 date strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IsoDateRange {
    pub start: String,
    pub end: String,
}

/// The active viewing window.
///
/// For every preset except [`PeriodPreset::Custom`] the bounds are a cache of the resolved
/// range and are recomputed on each recalculation. Custom bounds hold raw user input until
/// normalization replaces them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PeriodFilter {
    pub preset: PeriodPreset,
    pub start_date: String,
    pub end_date: String,
}

impl PeriodFilter {
    /// A filter for `preset` whose bounds have not been resolved yet.
    pub fn unresolved(preset: PeriodPreset) -> Self {
        Self {
            preset,
            start_date: String::new(),
            end_date: String::new(),
        }
    }

    pub fn custom(start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        Self {
            preset: PeriodPreset::Custom,
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }

    pub fn with_range(preset: PeriodPreset, range: IsoDateRange) -> Self {
        Self {
            preset,
            start_date: range.start,
            end_date: range.end,
        }
    }
}

impl Default for PeriodFilter {
    fn default() -> Self {
        Self::unresolved(PeriodPreset::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_round_trips_through_its_key() {
        for preset in PeriodPreset::ALL {
            assert_eq!(preset.key().parse::<PeriodPreset>().unwrap(), preset);
        }
        assert_eq!("YTD".parse::<PeriodPreset>().unwrap(), PeriodPreset::YearToDate);
    }

    #[test]
    fn preset_serializes_in_snake_case() {
        let json = serde_json::to_string(&PeriodPreset::YearToDate).unwrap();
        assert_eq!(json, "\"year_to_date\"");
    }

    #[test]
    fn unknown_preset_is_invalid_input() {
        assert!(matches!(
            "fortnight".parse::<PeriodPreset>(),
            Err(PulseError::InvalidInput(_))
        ));
    }
}
