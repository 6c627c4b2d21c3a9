//! Header rows: raw dimension values per data column.

use reftab_ingest::RawRow;

use crate::error::{Result, TableError};

/// Raw header values for one data column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderColumn {
    /// Column position in the source rows (always >= 1).
    pub position: usize,
    /// One raw value per header row, in header order.
    pub values: Vec<String>,
}

impl HeaderColumn {
    /// Values as string slices, ready for [`Dimensions::decode`](crate::Dimensions::decode).
    pub fn raw(&self) -> Vec<&str> {
        self.values.iter().map(String::as_str).collect()
    }
}

/// Mapping from column position to the raw values of the header rows.
///
/// The first header row defines the table width; column 0 holds the
/// dimension labels and is not indexed.
#[derive(Debug, Clone, Default)]
pub struct HeaderIndex {
    columns: Vec<HeaderColumn>,
    /// Source row index of each header row.
    rows: Vec<u64>,
}

impl HeaderIndex {
    /// Builds the index from the header rows, one per dimension.
    pub fn from_rows(header_rows: &[RawRow]) -> Result<Self> {
        let Some(first) = header_rows.first() else {
            return Ok(Self::default());
        };
        let width = first.len();

        for row in &header_rows[1..] {
            if row.len() < width {
                return Err(TableError::RaggedHeader {
                    row: row.index(),
                    columns: row.len(),
                    expected: width,
                });
            }
        }

        let columns = (1..width)
            .map(|position| HeaderColumn {
                position,
                values: header_rows
                    .iter()
                    .map(|row| row.get(position).unwrap_or_default().to_string())
                    .collect(),
            })
            .collect();

        Ok(Self {
            columns,
            rows: header_rows.iter().map(RawRow::index).collect(),
        })
    }

    /// Data columns in source order.
    pub fn columns(&self) -> &[HeaderColumn] {
        &self.columns
    }

    /// Source row index of header row `dimension`.
    pub fn row_of(&self, dimension: usize) -> u64 {
        self.rows.get(dimension).copied().unwrap_or_default()
    }

    /// Returns the number of data columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if there are no data columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
