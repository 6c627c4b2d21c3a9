//! Composite-key coefficient tables.
//!
//! A table is read from CSV with one header row per key dimension followed
//! by data rows labelled in column 0. Every data cell becomes a [`Record`]
//! addressed by the column's decoded header values plus the row's decoded
//! label.
//!
//! # Module Organization
//!
//! - [`key`]: [`Category`] converters and [`Dimensions`] tuples
//! - [`header`]: raw header values per column
//! - [`options`]: [`TableOptions`] and cell parsing
//! - [`record`]: [`Record`] and [`LookupMiss`]
//! - [`table`]: [`CompositeKeyTable`] construction and lookup
//!
//! # Misses
//!
//! A lookup that finds nothing is not an error. [`CompositeKeyTable::lookup`]
//! returns `None` and logs one `error` event naming the key component that
//! was most likely wrong; [`CompositeKeyTable::resolve`] returns the same
//! diagnosis as a [`LookupMiss`] value instead of logging it.

pub mod error;
pub mod header;
pub mod key;
pub mod options;
pub mod record;
pub mod table;

// Error types
pub use error::{Result, TableError};

// Keys
pub use key::{Category, DecodeFailure, Dimensions, component_names};

// Table
pub use header::{HeaderColumn, HeaderIndex};
pub use options::{DEFAULT_BLANK_VALUE, TableOptions, parse_cell};
pub use record::{LookupMiss, Record};
pub use table::CompositeKeyTable;

// Row source
pub use reftab_ingest::{IngestError, RawRow, TabularRecordReader};
