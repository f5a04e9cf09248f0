#![doc(test(attr(deny(warnings))))]

//! Budget Pulse tracks income and expense entries and derives period-scoped KPIs
//! (totals, weekly trend, category share) through one deterministic recalculation path.

pub mod cli;
pub mod config;
pub mod core;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod period;
pub mod storage;
pub mod theme;
pub mod utils;

pub use crate::core::{Clock, FixedClock, SharedTransactionStore, SystemClock, TransactionStore};
pub use crate::errors::{PulseError, Result};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Budget Pulse tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
