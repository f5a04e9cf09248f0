use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::info;

use crate::{
    config::{tmp_path, write_atomic},
    core::utils::{ensure_dir, PathResolver},
    errors::{PulseError, Result},
};

use super::{StorageBackend, StoreSnapshot, SNAPSHOT_SCHEMA_VERSION};

/// Stores the snapshot as pretty-printed JSON in a single file.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: PathBuf) -> Result<Self> {
        if let Some(parent) = path.parent() {
            ensure_dir(parent)?;
        }
        Ok(Self { path })
    }

    /// Storage at the default data file below `root`, or below the app data directory.
    pub fn in_dir(root: Option<PathBuf>) -> Result<Self> {
        let base = PathResolver::resolve_base(root);
        Self::new(PathResolver::data_file_in(&base))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for JsonStorage {
    fn save(&self, snapshot: &StoreSnapshot) -> Result<()> {
        save_snapshot_to_path(snapshot, &self.path)
    }

    fn load(&self) -> Result<StoreSnapshot> {
        load_snapshot_from_path(&self.path)
    }
}

/// Writes the snapshot through a temporary file and renames it into place.
pub fn save_snapshot_to_path(snapshot: &StoreSnapshot, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(snapshot)?;
    let tmp = tmp_path(path);
    write_atomic(&tmp, &json)?;
    fs::rename(&tmp, path)?;
    info!(
        path = %path.display(),
        entries = snapshot.entries.len(),
        "snapshot saved"
    );
    Ok(())
}

pub fn load_snapshot_from_path(path: &Path) -> Result<StoreSnapshot> {
    if !path.exists() {
        return Err(PulseError::Storage(format!(
            "snapshot `{}` not found",
            path.display()
        )));
    }
    let data = fs::read_to_string(path)?;
    let snapshot: StoreSnapshot = serde_json::from_str(&data)?;
    if snapshot.schema_version != SNAPSHOT_SCHEMA_VERSION {
        return Err(PulseError::InvalidInput(format!(
            "snapshot `{}` uses schema version {} (expected {})",
            path.display(),
            snapshot.schema_version,
            SNAPSHOT_SCHEMA_VERSION
        )));
    }
    info!(
        path = %path.display(),
        entries = snapshot.entries.len(),
        "snapshot loaded"
    );
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::period::PeriodFilter;
    use crate::domain::transaction::{PrimaryCategory, TransactionEntry};
    use chrono::Utc;
    use tempfile::tempdir;

    fn snapshot() -> StoreSnapshot {
        StoreSnapshot {
            schema_version: SNAPSHOT_SCHEMA_VERSION,
            saved_at: Utc::now(),
            filter: PeriodFilter::custom("2024-01-01", "2024-01-31"),
            entries: vec![TransactionEntry::new(
                "2024-01-05",
                "Paycheck",
                PrimaryCategory::Income,
                "Salary",
                2500.0,
            )],
        }
    }

    #[test]
    fn saves_and_loads_snapshot() {
        let dir = tempdir().unwrap();
        let storage = JsonStorage::in_dir(Some(dir.path().to_path_buf())).unwrap();
        let original = snapshot();
        storage.save(&original).unwrap();
        assert_eq!(storage.load().unwrap(), original);
        assert!(!tmp_path(storage.path()).exists());
    }

    #[test]
    fn missing_file_is_a_storage_error() {
        let dir = tempdir().unwrap();
        let storage = JsonStorage::new(dir.path().join("absent.json")).unwrap();
        assert!(matches!(storage.load(), Err(PulseError::Storage(_))));
    }

    #[test]
    fn newer_schema_is_rejected() {
        let dir = tempdir().unwrap();
        let storage = JsonStorage::new(dir.path().join("data.json")).unwrap();
        let mut future = snapshot();
        future.schema_version = SNAPSHOT_SCHEMA_VERSION + 1;
        storage.save(&future).unwrap();
        assert!(matches!(storage.load(), Err(PulseError::InvalidInput(_))));
    }
}
