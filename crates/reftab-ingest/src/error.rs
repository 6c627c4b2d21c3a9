//! Error types for reading tabular reference data.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading rows from a CSV source.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IngestError {
    /// The source could not be opened (missing file, permissions, ...).
    #[error("source unavailable: {path}: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading failed part-way through the stream.
    ///
    /// `row` is the index of the last row emitted before the failure.
    #[error("failed to read past row {row}: {source}")]
    Read {
        row: u64,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
