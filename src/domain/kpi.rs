//! Derived analytics and the published store snapshot.

use serde::{Deserialize, Serialize};

use crate::domain::period::PeriodFilter;
use crate::domain::transaction::TransactionEntry;

/// One calendar week (Monday start) of summed income and expenses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrendSeriesPoint {
    /// Short month-day label of the bucket's Monday, e.g. `Mar 4`.
    pub label: String,
    /// ISO date of the bucket's Monday.
    pub week_start: String,
    pub income: f64,
    pub expenses: f64,
}

/// Portion of filtered expense attributable to one category or subcategory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryShareSlice {
    pub category: String,
    pub value: f64,
    /// Percent of total expense with one decimal, e.g. `92.5`.
    pub percentage: f64,
}

/// Summary metrics for the filtered period. Always rebuilt from scratch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct KpiBundle {
    pub total_income: f64,
    pub total_expenses: f64,
    pub amount_saved: f64,
    /// Same value as `amount_saved` for now; kept separate for consumers that label it apart.
    pub leftover_balance: f64,
    pub trend_series: Vec<TrendSeriesPoint>,
    pub category_share: Vec<CategoryShareSlice>,
}

/// Snapshot published after every mutation. Replaced wholesale, never patched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionStoreState {
    /// Every entry, newest first.
    pub entries: Vec<TransactionEntry>,
    pub filter: PeriodFilter,
    /// Entries inside the normalized filter window, newest first.
    pub filtered_entries: Vec<TransactionEntry>,
    pub kpis: KpiBundle,
}
