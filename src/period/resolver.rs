//! Turns presets and raw custom bounds into concrete, non-future date ranges.
//!
//! Nothing here fails: unparseable bounds fall back to defaults and inverted bounds are
//! swapped, so every output satisfies `start <= end <= today`.

use chrono::NaiveDate;

use crate::domain::period::{IsoDateRange, PeriodFilter, PeriodPreset};

use super::calendar::{
    end_of_month, parse_iso_date, shift_month, start_of_month, start_of_year, to_iso_date,
};

fn iso_range(start: NaiveDate, end: NaiveDate) -> IsoDateRange {
    IsoDateRange {
        start: to_iso_date(start),
        end: to_iso_date(end),
    }
}

/// Resolves `preset` against `today`.
///
/// `Custom` has no bounds of its own here and resolves to month-to-date until the caller
/// supplies a range.
pub fn resolve_preset_range(preset: PeriodPreset, today: NaiveDate) -> IsoDateRange {
    match preset {
        PeriodPreset::ThisMonth => {
            let end = end_of_month(today).min(today);
            iso_range(start_of_month(today), end)
        }
        PeriodPreset::LastMonth => {
            let previous = shift_month(today, -1);
            iso_range(start_of_month(previous), end_of_month(previous))
        }
        PeriodPreset::YearToDate => iso_range(start_of_year(today), today),
        PeriodPreset::Custom => iso_range(start_of_month(today), today),
    }
}

/// Normalizes user-supplied custom bounds.
///
/// Unparseable bounds default to the first of the month and to today. The bounds are then
/// ordered and both clamped to `today`, so a range lying wholly in the future collapses
/// onto today.
pub fn normalize_custom_range(start: &str, end: &str, today: NaiveDate) -> IsoDateRange {
    let start = parse_iso_date(start).unwrap_or_else(|| start_of_month(today));
    let end = parse_iso_date(end).unwrap_or(today);
    let (low, high) = if start > end { (end, start) } else { (start, end) };
    iso_range(low.min(today), high.min(today))
}

/// Returns `filter` with bounds recomputed for its preset.
///
/// Stored bounds of non-custom presets are ignored; they are only a cache.
pub fn apply_preset_to_filter(filter: &PeriodFilter, today: NaiveDate) -> PeriodFilter {
    let range = match filter.preset {
        PeriodPreset::Custom => normalize_custom_range(&filter.start_date, &filter.end_date, today),
        preset => resolve_preset_range(preset, today),
    };
    PeriodFilter::with_range(filter.preset, range)
}
