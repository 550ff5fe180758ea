//! FILENAME: core/chart-config/src/error.rs

use thiserror::Error;

use crate::definition::FieldUid;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Field not found in section: {0}")]
    FieldNotFound(FieldUid),

    #[error("Data section not found: {0}")]
    SectionNotFound(String),
}
