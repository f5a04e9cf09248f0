//! Domain types: entries, period filters and the derived KPI snapshot.

pub mod common;
pub mod kpi;
pub mod period;
pub mod transaction;

pub use common::{Displayable, Identifiable};
pub use kpi::{CategoryShareSlice, KpiBundle, TransactionStoreState, TrendSeriesPoint};
pub use period::{IsoDateRange, PeriodFilter, PeriodPreset};
pub use transaction::{
    default_entries, default_subcategories, demo_entries, parse_amount, PrimaryCategory,
    TransactionDraft, TransactionEntry, TransactionKind,
};
