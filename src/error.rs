//! Error types for simdoc operations.

use thiserror::Error;

/// Errors that can occur while building, rendering or saving a document.
#[derive(Error, Debug)]
pub enum Error {
    #[error("heading level must be between 1 and 6, got {0}")]
    InvalidHeadingLevel(u8),

    #[error("list items cannot be null")]
    MissingListItems,

    #[error("table rows cannot be null")]
    MissingTableRows,

    #[error("mixed table row types are not supported")]
    MixedTableRows,

    #[error("table requires at least one column")]
    EmptyTable,

    #[error("invalid alignment value: {0:?}")]
    InvalidAlignment(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("table rows must be sequences or mappings, got {0}")]
    InvalidTableRow(String),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
