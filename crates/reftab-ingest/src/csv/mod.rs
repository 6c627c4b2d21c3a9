//! CSV reading utilities.

mod reader;
mod scanner;

pub use reader::{RawRow, TabularRecordReader};
pub use scanner::{QuoteState, has_open_quote, split_fields, unescape};
