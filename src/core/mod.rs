//! Aggregation, recalculation and the mutable store that publishes snapshots.

pub mod aggregation;
pub mod clock;
pub mod recalculate;
pub mod store;
pub mod utils;

pub use aggregation::build_kpis;
pub use clock::{Clock, FixedClock, SystemClock};
pub use recalculate::recalculate;
pub use store::{SharedTransactionStore, SubscriptionId, TransactionStore};
