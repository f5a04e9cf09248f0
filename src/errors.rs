use std::result::Result as StdResult;

use thiserror::Error;

/// Error type for the boundaries of the crate: user input, storage and configuration.
///
/// Recalculation itself never fails; malformed dates and ranges are normalized instead.
#[derive(Debug, Error)]
pub enum PulseError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = StdResult<T, PulseError>;

impl From<std::io::Error> for PulseError {
    fn from(err: std::io::Error) -> Self {
        PulseError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for PulseError {
    fn from(err: serde_json::Error) -> Self {
        PulseError::Storage(err.to_string())
    }
}
