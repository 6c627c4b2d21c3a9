//! Composite-key table built from header and data rows.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::io::BufRead;

use reftab_ingest::{RawRow, TabularRecordReader};

use crate::error::{Result, TableError};
use crate::header::HeaderIndex;
use crate::key::{Category, Dimensions, component_names};
use crate::options::{TableOptions, parse_cell};
use crate::record::{LookupMiss, Record};

/// Duplicate keys logged individually before switching to a summary.
const MAX_DUPLICATE_WARNINGS: usize = 5;

/// Immutable lookup table keyed by `(dimensions, identifier)`.
///
/// The first `D::COUNT` source rows are header rows, one per dimension and
/// column-aligned with the data. Every later row is a data row whose column 0
/// is the row identifier and whose remaining cells are the values.
///
/// Built once and never mutated, so a table can be shared across threads.
///
/// # Example
///
/// ```
/// use reftab_table::{Category, CompositeKeyTable, TableOptions};
/// # use std::fmt;
/// # #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// # enum Region { East, West }
/// # impl fmt::Display for Region {
/// #     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{self:?}") }
/// # }
/// # impl Category for Region {
/// #     const DIMENSION: &'static str = "Region";
/// #     fn decode(raw: &str) -> Result<Self, String> {
/// #         match raw { "East" => Ok(Self::East), "West" => Ok(Self::West), _ => Err(raw.into()) }
/// #     }
/// # }
/// # #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// # struct Crop;
/// # impl fmt::Display for Crop {
/// #     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "Wheat") }
/// # }
/// # impl Category for Crop {
/// #     const DIMENSION: &'static str = "Crop";
/// #     fn decode(raw: &str) -> Result<Self, String> {
/// #         if raw == "Wheat" { Ok(Crop) } else { Err(raw.into()) }
/// #     }
/// # }
///
/// let table = CompositeKeyTable::<(Region,), Crop>::from_embedded(
///     ",East,West\nWheat,1.5,\n",
///     TableOptions::named("demo"),
/// )?;
///
/// assert_eq!(table.value((Region::East,), Crop), Some(1.5));
/// assert_eq!(table.value((Region::West,), Crop), Some(0.0));
/// # Ok::<(), reftab_table::TableError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CompositeKeyTable<D, R> {
    name: String,
    records: Vec<Record<D, R>>,
    index: HashMap<(D, R), usize>,
    relaxation_order: Vec<usize>,
}

impl<D: Dimensions, R: Category> CompositeKeyTable<D, R> {
    /// Builds a table from text embedded in the binary.
    pub fn from_embedded(content: &str, options: TableOptions) -> Result<Self> {
        Self::from_reader(TabularRecordReader::from_embedded(content), options)
    }

    /// Builds a table from a row reader.
    pub fn from_reader<B: BufRead>(
        reader: TabularRecordReader<B>,
        options: TableOptions,
    ) -> Result<Self> {
        Self::from_rows(reader, options)
    }

    /// Builds a table from a sequence of rows.
    ///
    /// # Errors
    ///
    /// Fails on the first read error, missing or ragged header row,
    /// undecodable header cell or row label, or non-numeric data cell.
    pub fn from_rows<I>(rows: I, options: TableOptions) -> Result<Self>
    where
        I: IntoIterator<Item = reftab_ingest::Result<RawRow>>,
    {
        let relaxation_order = resolve_relaxation_order::<D>(options.relaxation_order)?;
        let names = component_names::<D, R>();
        let mut rows = rows.into_iter();

        let header_rows = rows
            .by_ref()
            .take(D::COUNT)
            .collect::<reftab_ingest::Result<Vec<_>>>()?;
        if header_rows.len() < D::COUNT {
            return Err(TableError::MissingHeaderRows {
                expected: D::COUNT,
                found: header_rows.len(),
            });
        }

        let headers = HeaderIndex::from_rows(&header_rows)?;
        let columns = headers
            .columns()
            .iter()
            .map(|column| {
                D::decode(&column.raw())
                    .map(|dimensions| (column.position, dimensions))
                    .map_err(|failure| TableError::UnknownCategoryValue {
                        dimension: names[failure.component],
                        value: failure.value,
                        row: headers.row_of(failure.component),
                        column: column.position,
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut records = Vec::new();
        let mut index = HashMap::new();
        let mut duplicates = 0usize;
        let mut data_rows = 0usize;

        for row in rows {
            let row = row?;
            if row.is_blank() {
                continue;
            }
            data_rows += 1;

            let label = row.label().trim();
            let identifier =
                R::decode(label).map_err(|_| TableError::UnknownCategoryValue {
                    dimension: R::DIMENSION,
                    value: label.to_string(),
                    row: row.index(),
                    column: 0,
                })?;

            for &(column, dimensions) in &columns {
                let raw = row.get(column).unwrap_or_default();
                let value = parse_cell(raw, options.blank_value).map_err(|_| {
                    TableError::InvalidNumber {
                        row: row.index(),
                        column,
                        value: raw.to_string(),
                    }
                })?;

                match index.entry((dimensions, identifier)) {
                    Entry::Vacant(slot) => {
                        slot.insert(records.len());
                        records.push(Record {
                            dimensions,
                            identifier,
                            value,
                            row: row.index(),
                            column,
                        });
                    }
                    Entry::Occupied(_) => {
                        duplicates += 1;
                        if duplicates <= MAX_DUPLICATE_WARNINGS {
                            tracing::warn!(
                                table = %options.name,
                                row = row.index(),
                                column,
                                key = ?(dimensions, identifier),
                                "Duplicate key ignored, keeping first occurrence"
                            );
                        }
                    }
                }
            }
        }

        if duplicates > MAX_DUPLICATE_WARNINGS {
            tracing::warn!(
                table = %options.name,
                duplicate_count = duplicates,
                "Table contains duplicate keys"
            );
        }

        if data_rows == 0 {
            return Err(TableError::EmptyTable);
        }

        tracing::debug!(
            table = %options.name,
            columns = columns.len(),
            rows = data_rows,
            records = records.len(),
            "Built composite-key table"
        );

        Ok(Self {
            name: options.name,
            records,
            index,
            relaxation_order,
        })
    }

    /// Finds the record for a key, logging a diagnostic on a miss.
    ///
    /// Returns `None` when no record matches; exactly one `error` event naming
    /// the blamed component is emitted in that case. Hits log nothing.
    pub fn lookup(&self, dimensions: D, identifier: R) -> Option<&Record<D, R>> {
        match self.resolve(dimensions, identifier) {
            Ok(record) => Some(record),
            Err(miss) => {
                tracing::error!(
                    table = %miss.table,
                    component = %miss.component,
                    value = %miss.value,
                    key = ?(dimensions, identifier),
                    "{miss}. Returning none"
                );
                None
            }
        }
    }

    /// The value for a key, or `None` on a miss (logged like [`lookup`](Self::lookup)).
    pub fn value(&self, dimensions: D, identifier: R) -> Option<f64> {
        self.lookup(dimensions, identifier).map(|record| record.value)
    }

    /// Finds the record for a key without logging.
    ///
    /// On a miss, relaxations are tried in the configured order, each
    /// ignoring exactly one key component. The first one that matches any
    /// record names the component to blame; if none matches, the last
    /// component tried is blamed.
    pub fn resolve(
        &self,
        dimensions: D,
        identifier: R,
    ) -> std::result::Result<&Record<D, R>, LookupMiss> {
        if let Some(&slot) = self.index.get(&(dimensions, identifier)) {
            return Ok(&self.records[slot]);
        }
        Err(self.attribute_miss(&dimensions, &identifier))
    }

    /// Finds the record for a key without logging or diagnosing a miss.
    pub fn get(&self, dimensions: D, identifier: R) -> Option<&Record<D, R>> {
        self.index
            .get(&(dimensions, identifier))
            .map(|&slot| &self.records[slot])
    }

    fn attribute_miss(&self, dimensions: &D, identifier: &R) -> LookupMiss {
        let mut blamed = D::COUNT;
        let mut confirmed = false;

        for &component in &self.relaxation_order {
            blamed = component;
            if self
                .records
                .iter()
                .any(|record| record.matches_except(dimensions, identifier, component))
            {
                confirmed = true;
                break;
            }
        }

        let value = if blamed == D::COUNT {
            identifier.to_string()
        } else {
            dimensions.component_value(blamed).unwrap_or_default()
        };

        LookupMiss {
            table: self.name.clone(),
            component: component_names::<D, R>()[blamed],
            component_index: blamed,
            value,
            confirmed,
        }
    }

    /// Table name used in diagnostics.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All records in source order (row by row, then column by column).
    pub fn records(&self) -> &[Record<D, R>] {
        &self.records
    }

    /// Iterates over all records in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record<D, R>> {
        self.records.iter()
    }

    /// Component names: dimensions in header order, then the row identifier.
    pub fn component_names(&self) -> Vec<&'static str> {
        component_names::<D, R>()
    }

    /// Component indices in the order relaxations are tried.
    pub fn relaxation_order(&self) -> &[usize] {
        &self.relaxation_order
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the table has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a, D, R> IntoIterator for &'a CompositeKeyTable<D, R> {
    type Item = &'a Record<D, R>;
    type IntoIter = std::slice::Iter<'a, Record<D, R>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Validates a custom relaxation order or builds the default one.
fn resolve_relaxation_order<D: Dimensions>(order: Option<Vec<usize>>) -> Result<Vec<usize>> {
    let components = D::COUNT + 1;
    let Some(order) = order else {
        return Ok(std::iter::once(D::COUNT).chain(0..D::COUNT).collect());
    };

    let mut seen = vec![false; components];
    let valid = !order.is_empty()
        && order.iter().all(|&component| {
            component < components && !std::mem::replace(&mut seen[component], true)
        });

    if valid {
        Ok(order)
    } else {
        Err(TableError::InvalidRelaxationOrder { order, components })
    }
}
