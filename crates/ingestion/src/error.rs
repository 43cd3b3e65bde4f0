//! Error types for the ingestion crate.

use thiserror::Error;

/// Errors that can occur during ingestion.
#[derive(Error, Debug)]
pub enum IngestionError {
    #[error("Failed to read {path}: {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed CSV in {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("{path} line {line}: expected at least {expected} columns, found {found}")]
    MissingColumn {
        path: String,
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("{path} line {line}: column {column} is not a number: {value:?}")]
    InvalidNumber {
        path: String,
        line: u64,
        column: usize,
        value: String,
    },

    #[error("No valid samples found in {path}: all {total} samples have |depth| >= {threshold}")]
    NoValidSamples {
        path: String,
        total: usize,
        threshold: f64,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestionError>;
