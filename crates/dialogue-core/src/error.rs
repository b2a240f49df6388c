//! Error types for transcript conversion

use thiserror::Error;

/// Conversion errors
///
/// Only top-level precondition failures surface here. Malformed blocks or
/// messages inside an otherwise valid input are skipped with a diagnostic.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
