use dirs::home_dir;
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::errors::Result;

const DEFAULT_DIR_NAME: &str = ".budget_pulse";
const CONFIG_DIR: &str = "config";
const CONFIG_FILE: &str = "config.json";
const DATA_FILE: &str = "transactions.json";

/// Returns the application data directory, defaulting to `~/.budget_pulse`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("BUDGET_PULSE_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Resolves file locations below a base directory.
pub struct PathResolver;

impl PathResolver {
    pub fn base_dir() -> PathBuf {
        app_data_dir()
    }

    pub fn resolve_base(custom: Option<PathBuf>) -> PathBuf {
        custom.unwrap_or_else(app_data_dir)
    }

    pub fn config_dir_in(base: &Path) -> PathBuf {
        base.join(CONFIG_DIR)
    }

    pub fn config_file_in(base: &Path) -> PathBuf {
        Self::config_dir_in(base).join(CONFIG_FILE)
    }

    /// Default location of the saved transaction snapshot.
    pub fn data_file_in(base: &Path) -> PathBuf {
        base.join(DATA_FILE)
    }
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_hang_off_the_base() {
        let base = Path::new("/tmp/pulse");
        assert_eq!(
            PathResolver::config_file_in(base),
            Path::new("/tmp/pulse/config/config.json")
        );
        assert_eq!(
            PathResolver::data_file_in(base),
            Path::new("/tmp/pulse/transactions.json")
        );
        assert_eq!(
            PathResolver::resolve_base(Some(base.to_path_buf())),
            base.to_path_buf()
        );
    }
}
