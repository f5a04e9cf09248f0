mod common;

use std::fs;

use budget_pulse::{
    config::{Config, ConfigManager},
    core::TransactionStore,
    domain::PeriodPreset,
    errors::PulseError,
    storage::{JsonStorage, StorageBackend, SNAPSHOT_SCHEMA_VERSION},
};

use common::{clock, march_store, temp_dir};

#[test]
fn snapshot_survives_a_save_and_restore() {
    let dir = temp_dir();
    let storage = JsonStorage::in_dir(Some(dir.clone())).expect("storage");

    let mut original = march_store();
    original.set_custom_range("2024-03-02", "2024-03-31");
    storage.save(&original.snapshot()).expect("save");

    let mut restored = TransactionStore::with_entries(clock(), Vec::new(), PeriodPreset::ThisMonth);
    restored.restore(storage.load().expect("load"));

    let before = original.current_state();
    let after = restored.current_state();
    assert_eq!(before.entries, after.entries);
    assert_eq!(before.filter, after.filter);
    assert_eq!(before.kpis, after.kpis);
}

#[test]
fn saved_file_is_pretty_json_without_kpis() {
    let dir = temp_dir();
    let path = dir.join("export.json");
    let storage = JsonStorage::new(path.clone()).expect("storage");
    storage.save(&march_store().snapshot()).expect("save");

    let raw = fs::read_to_string(&path).expect("read");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("json");
    assert_eq!(value["schema_version"], SNAPSHOT_SCHEMA_VERSION);
    assert_eq!(value["filter"]["preset"], "this_month");
    assert_eq!(value["entries"].as_array().map(Vec::len), Some(3));
    assert_eq!(value["entries"][0]["primary_category"], "variable_expense");
    assert!(value.get("kpis").is_none());
    assert!(raw.contains('\n'));
}

#[test]
fn corrupt_snapshot_is_a_storage_error() {
    let dir = temp_dir();
    let path = dir.join("broken.json");
    fs::write(&path, "[1, 2").expect("write");
    let storage = JsonStorage::new(path).expect("storage");
    assert!(matches!(storage.load(), Err(PulseError::Storage(_))));
}

#[test]
fn config_drives_store_construction() {
    let dir = temp_dir();
    let manager = ConfigManager::with_base_dir(dir.clone()).expect("manager");
    let config = Config {
        default_preset: PeriodPreset::YearToDate,
        seed_sample_entries: false,
        ..Config::default()
    };
    manager.save(&config).expect("save config");

    let loaded = manager.load().expect("load config");
    let store = TransactionStore::from_config(&loaded, clock());
    let state = store.current_state();
    assert!(state.entries.is_empty());
    assert_eq!(state.filter.preset, PeriodPreset::YearToDate);
    assert_eq!(state.filter.start_date, "2024-01-01");
    assert_eq!(
        loaded.data_file_or_default(manager.base_dir()),
        dir.join("transactions.json")
    );
}
