//! Error types for loading embedded coefficient tables.

use reftab_table::TableError;
use thiserror::Error;

/// Errors that can occur when a provider loads its table.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProviderError {
    /// The embedded resource could not be turned into a table.
    #[error("failed to load {resource}: {source}")]
    TableLoad {
        resource: &'static str,
        #[source]
        source: TableError,
    },
}

/// Result type for provider operations.
pub type Result<T> = std::result::Result<T, ProviderError>;
