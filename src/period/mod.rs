//! Period resolution, window membership and entry ordering.

pub mod calendar;
pub mod membership;
pub mod resolver;
pub mod summary;

pub use calendar::{parse_iso_date, to_iso_date};
pub use membership::{
    compare_entries, compare_entries_by_date_desc, date_is_within_filter, sort_entries,
};
pub use resolver::{apply_preset_to_filter, normalize_custom_range, resolve_preset_range};
pub use summary::{
    describe_range_adjustments, summarize_period_range, PeriodRangeSummary, RangeAdjustment,
};
