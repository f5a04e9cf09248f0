//! Window membership and the newest-first ordering used for every entry list.

use std::cmp::Ordering;

use crate::domain::period::PeriodFilter;
use crate::domain::transaction::TransactionEntry;

use super::calendar::parse_iso_date;

/// Inclusive membership test. The filter bounds may be stored in either order.
///
/// Returns `false` when the date or either bound fails to parse.
pub fn date_is_within_filter(date: &str, filter: &PeriodFilter) -> bool {
    let (Some(date), Some(start), Some(end)) = (
        parse_iso_date(date),
        parse_iso_date(&filter.start_date),
        parse_iso_date(&filter.end_date),
    ) else {
        return false;
    };
    date >= start.min(end) && date <= start.max(end)
}

/// Later dates first. Unparseable dates sort after every valid one and tie with each other.
pub fn compare_entries_by_date_desc(a: &str, b: &str) -> Ordering {
    match (parse_iso_date(a), parse_iso_date(b)) {
        (Some(left), Some(right)) => right.cmp(&left),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Total display order: date descending, then identifier descending.
pub fn compare_entries(a: &TransactionEntry, b: &TransactionEntry) -> Ordering {
    compare_entries_by_date_desc(&a.date, &b.date).then_with(|| b.id.cmp(&a.id))
}

/// Sorts in place with [`compare_entries`].
pub fn sort_entries(entries: &mut [TransactionEntry]) {
    entries.sort_by(compare_entries);
}
