//! Error types for table construction.

use reftab_ingest::IngestError;
use thiserror::Error;

/// Errors that can occur while building a [`CompositeKeyTable`](crate::CompositeKeyTable).
///
/// All of these are configuration errors in the bundled data; a lookup miss
/// is never reported through this type.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TableError {
    /// The row source failed.
    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// The source ended before all header rows were read.
    #[error("expected {expected} header rows, found {found}")]
    MissingHeaderRows { expected: usize, found: usize },

    /// A header row is narrower than the first header row.
    #[error("header row {row} has {columns} columns, expected {expected}")]
    RaggedHeader {
        row: u64,
        columns: usize,
        expected: usize,
    },

    /// A header cell or row label is not a known category value.
    #[error("unknown {dimension} value '{value}' at row {row}, column {column}")]
    UnknownCategoryValue {
        dimension: &'static str,
        value: String,
        row: u64,
        column: usize,
    },

    /// A non-blank data cell is not a number.
    #[error("invalid number '{value}' at row {row}, column {column}")]
    InvalidNumber {
        row: u64,
        column: usize,
        value: String,
    },

    /// The relaxation order names a component the key does not have, or
    /// names one twice.
    #[error("invalid relaxation order {order:?} for {components} key components")]
    InvalidRelaxationOrder {
        order: Vec<usize>,
        components: usize,
    },

    /// Header rows were present but no data row followed.
    #[error("table has no data rows")]
    EmptyTable,
}

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;
