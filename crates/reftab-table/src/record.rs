//! Table records and lookup misses.

use std::fmt;

use serde::Serialize;

use crate::key::{Category, Dimensions};

/// One materialized data cell with its full key.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Record<D, R> {
    /// Decoded header values of the cell's column.
    pub dimensions: D,
    /// Decoded column 0 label of the cell's row.
    pub identifier: R,
    /// Cell value (the blank value for empty cells).
    pub value: f64,
    /// 1-based source row.
    pub row: u64,
    /// Source column.
    pub column: usize,
}

impl<D: Dimensions, R: Category> Record<D, R> {
    /// Returns true if the record's key equals the probe on every component
    /// except `skipped`.
    pub fn matches_except(&self, dimensions: &D, identifier: &R, skipped: usize) -> bool {
        let identifier_matches = skipped == D::COUNT || self.identifier == *identifier;
        identifier_matches
            && (0..D::COUNT)
                .filter(|&component| component != skipped)
                .all(|component| self.dimensions.component_eq(dimensions, component))
    }
}

/// Why a lookup found nothing.
///
/// Produced by [`CompositeKeyTable::resolve`](crate::CompositeKeyTable::resolve)
/// and logged by [`CompositeKeyTable::lookup`](crate::CompositeKeyTable::lookup).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupMiss {
    /// Table the lookup ran against.
    pub table: String,
    /// Name of the component blamed for the miss.
    pub component: &'static str,
    /// Index of that component (`D::COUNT` for the row identifier).
    pub component_index: usize,
    /// The queried value of that component.
    pub value: String,
    /// True if dropping the component found a matching record; false if
    /// no relaxation matched and the last one checked was blamed.
    pub confirmed: bool,
}

impl fmt::Display for LookupMiss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: unable to find {}: {} in the available data",
            self.table, self.component, self.value
        )
    }
}

impl std::error::Error for LookupMiss {}
