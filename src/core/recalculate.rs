//! The single path from raw entries and a filter to a published snapshot.

use chrono::NaiveDate;
use tracing::debug;

use crate::domain::kpi::TransactionStoreState;
use crate::domain::period::PeriodFilter;
use crate::domain::transaction::TransactionEntry;
use crate::period::{apply_preset_to_filter, date_is_within_filter, sort_entries};

use super::aggregation::build_kpis;

/// Rebuilds the whole store state from `entries` and `filter` as seen on `today`.
///
/// The filter is always re-normalized, whatever the caller claims about it. The function
/// is pure: identical inputs produce identical snapshots.
pub fn recalculate(
    mut entries: Vec<TransactionEntry>,
    filter: &PeriodFilter,
    today: NaiveDate,
) -> TransactionStoreState {
    let filter = apply_preset_to_filter(filter, today);

    let mut filtered_entries: Vec<TransactionEntry> = entries
        .iter()
        .filter(|entry| date_is_within_filter(&entry.date, &filter))
        .cloned()
        .collect();
    sort_entries(&mut filtered_entries);

    let kpis = build_kpis(&filtered_entries);
    sort_entries(&mut entries);

    debug!(
        preset = %filter.preset,
        start = %filter.start_date,
        end = %filter.end_date,
        total = entries.len(),
        in_period = filtered_entries.len(),
        "recalculated store state"
    );

    TransactionStoreState {
        entries,
        filter,
        filtered_entries,
        kpis,
    }
}
