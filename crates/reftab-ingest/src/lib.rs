//! Row reader for bundled coefficient tables.
//!
//! This crate turns comma-delimited text into a lazy sequence of rows, each
//! an ordered list of unescaped field strings.
//!
//! # Features
//!
//! - **Quoted fields**: commas and `""` escapes inside double quotes
//! - **Multi-line fields**: a quoted field may span physical lines
//! - **Row context**: a 1-based logical row counter for error reporting
//! - **Sources**: files, any `Read`, or text embedded with `include_str!`
//!
//! # Example
//!
//! ```
//! use reftab_ingest::TabularRecordReader;
//!
//! let csv = "Crop,\"Dark Brown\"\nWheat,\"line one\nline two\"\n";
//! let rows: Vec<_> = TabularRecordReader::from_embedded(csv)
//!     .collect::<reftab_ingest::Result<_>>()?;
//!
//! assert_eq!(rows.len(), 2);
//! assert_eq!(rows[1].fields(), ["Wheat", "line one\nline two"]);
//! # Ok::<(), reftab_ingest::IngestError>(())
//! ```

mod csv;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{QuoteState, RawRow, TabularRecordReader, has_open_quote, split_fields, unescape};
