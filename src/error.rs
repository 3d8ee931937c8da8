
use thiserror::Error;

use crate::record::RecordId;

#[derive(Error, Debug)]
pub enum GridbookError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Record not found")]
    NotFound { id: RecordId },
    #[error("Years must be between 0 and 5")]
    InvalidHorizon { years: i64 },
    #[error("Lock poisoned: {0}")]
    Lock(String),
}

pub type Result<T> = std::result::Result<T, GridbookError>;

// Helper conversions
impl From<config::ConfigError> for GridbookError {
    fn from(e: config::ConfigError) -> Self {
        Self::Config(e.to_string())
    }
}
