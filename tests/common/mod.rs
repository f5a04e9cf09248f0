#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use budget_pulse::{
    core::{FixedClock, TransactionStore},
    domain::{PeriodPreset, PrimaryCategory, TransactionEntry},
};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use tempfile::TempDir;
use uuid::Uuid;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated directory that outlives the calling test.
pub fn temp_dir() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    path
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// The reference "today" used across suites: 2024-03-15, a Friday in a leap year.
pub fn today() -> NaiveDate {
    date(2024, 3, 15)
}

pub fn clock() -> Arc<FixedClock> {
    Arc::new(FixedClock::new(today()))
}

pub fn entry(
    id: u128,
    date: &str,
    category: PrimaryCategory,
    sub: &str,
    amount: f64,
) -> TransactionEntry {
    TransactionEntry::new(date, format!("entry {id}"), category, sub, amount)
        .with_id(Uuid::from_u128(id))
}

/// Income of 3200 on Mar 1, rent 1800 on Mar 2 and groceries 145.76 on Mar 3, 2024.
pub fn march_entries() -> Vec<TransactionEntry> {
    vec![
        entry(1, "2024-03-01", PrimaryCategory::Income, "Freelance", 3200.0),
        entry(2, "2024-03-02", PrimaryCategory::FixedExpense, "Rent/Mortgage", 1800.0),
        entry(3, "2024-03-03", PrimaryCategory::VariableExpense, "Groceries", 145.76),
    ]
}

pub fn march_store() -> TransactionStore {
    TransactionStore::with_entries(clock(), march_entries(), PeriodPreset::ThisMonth)
}
