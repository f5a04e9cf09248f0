pub mod json_backend;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    domain::{period::PeriodFilter, transaction::TransactionEntry},
    errors::Result,
};

pub const SNAPSHOT_SCHEMA_VERSION: u32 = 1;

/// Persistable part of the store: raw entries plus the active filter.
///
/// KPIs are never stored; they are recalculated on restore.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreSnapshot {
    pub schema_version: u32,
    pub saved_at: DateTime<Utc>,
    pub filter: PeriodFilter,
    pub entries: Vec<TransactionEntry>,
}

/// Abstraction over persistence backends capable of storing store snapshots.
pub trait StorageBackend: Send + Sync {
    fn save(&self, snapshot: &StoreSnapshot) -> Result<()>;
    fn load(&self) -> Result<StoreSnapshot>;
}

pub use json_backend::JsonStorage;
