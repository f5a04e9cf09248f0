//! Human-facing descriptions of a resolved window and of how user input was corrected.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::period::{IsoDateRange, PeriodFilter};

use super::calendar::parse_iso_date;

const RANGE_LABEL_FORMAT: &str = "%b %-d, %Y";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PeriodRangeSummary {
    pub start_label: String,
    pub end_label: String,
    pub range_label: String,
    /// Inclusive day count; `None` when a bound does not parse.
    pub day_count: Option<i64>,
}

pub fn summarize_period_range(filter: &PeriodFilter) -> PeriodRangeSummary {
    match (
        parse_iso_date(&filter.start_date),
        parse_iso_date(&filter.end_date),
    ) {
        (Some(start), Some(end)) => {
            let start_label = start.format(RANGE_LABEL_FORMAT).to_string();
            let end_label = end.format(RANGE_LABEL_FORMAT).to_string();
            PeriodRangeSummary {
                range_label: format!("{start_label} to {end_label}"),
                start_label,
                end_label,
                day_count: Some((end - start).num_days().abs() + 1),
            }
        }
        _ => PeriodRangeSummary {
            start_label: filter.start_date.clone(),
            end_label: filter.end_date.clone(),
            range_label: format!("{} to {}", filter.start_date, filter.end_date),
            day_count: None,
        },
    }
}

/// A correction applied while normalizing a custom range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RangeAdjustment {
    StartReset,
    EndDefaulted,
    Swapped,
    FutureEndClamped,
}

impl fmt::Display for RangeAdjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            RangeAdjustment::StartReset => "Start date reset to the first day of the current month",
            RangeAdjustment::EndDefaulted => "End date defaulted to today",
            RangeAdjustment::Swapped => "Start date was moved before the end date",
            RangeAdjustment::FutureEndClamped => {
                "Future dates aren't supported yet; end date reset to today"
            }
        };
        f.write_str(message)
    }
}

/// Lists the corrections that turned `(user_start, user_end)` into `normalized`.
pub fn describe_range_adjustments(
    user_start: &str,
    user_end: &str,
    normalized: &IsoDateRange,
    today: NaiveDate,
) -> Vec<RangeAdjustment> {
    let start = parse_iso_date(user_start);
    let end = parse_iso_date(user_end);
    let mut adjustments = Vec::new();

    if start.is_none() {
        adjustments.push(RangeAdjustment::StartReset);
    }
    if end.is_none() {
        adjustments.push(RangeAdjustment::EndDefaulted);
    }
    if let (Some(start), Some(end)) = (start, end) {
        if start > end {
            adjustments.push(RangeAdjustment::Swapped);
        }
    }
    if let (Some(end), Some(normalized_end)) = (end, parse_iso_date(&normalized.end)) {
        if end > today && normalized_end != end {
            adjustments.push(RangeAdjustment::FutureEndClamped);
        }
    }
    adjustments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::period::resolver::normalize_custom_range;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn summary_counts_days_inclusively() {
        let summary = summarize_period_range(&PeriodFilter::custom("2024-02-01", "2024-02-29"));
        assert_eq!(summary.start_label, "Feb 1, 2024");
        assert_eq!(summary.range_label, "Feb 1, 2024 to Feb 29, 2024");
        assert_eq!(summary.day_count, Some(29));
    }

    #[test]
    fn summary_echoes_unparseable_bounds() {
        let summary = summarize_period_range(&PeriodFilter::custom("someday", "2024-02-29"));
        assert_eq!(summary.range_label, "someday to 2024-02-29");
        assert_eq!(summary.day_count, None);
    }

    #[test]
    fn clean_range_needs_no_adjustment() {
        let normalized = normalize_custom_range("2024-03-01", "2024-03-10", today());
        let adjustments =
            describe_range_adjustments("2024-03-01", "2024-03-10", &normalized, today());
        assert!(adjustments.is_empty());
    }

    #[test]
    fn reports_defaults_swap_and_clamp() {
        let normalized = normalize_custom_range("x", "", today());
        assert_eq!(
            describe_range_adjustments("x", "", &normalized, today()),
            vec![RangeAdjustment::StartReset, RangeAdjustment::EndDefaulted]
        );

        let normalized = normalize_custom_range("2024-04-10", "2024-03-01", today());
        assert_eq!(
            describe_range_adjustments("2024-04-10", "2024-03-01", &normalized, today()),
            vec![RangeAdjustment::Swapped]
        );

        let normalized = normalize_custom_range("2024-03-01", "2024-04-30", today());
        assert_eq!(
            describe_range_adjustments("2024-03-01", "2024-04-30", &normalized, today()),
            vec![RangeAdjustment::FutureEndClamped]
        );
    }
}
