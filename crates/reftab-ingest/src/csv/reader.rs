//! Streaming row reader with support for multi-line quoted fields.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::iter::FusedIterator;
use std::path::Path;

use crate::error::{IngestError, Result};

use super::scanner::{QuoteState, split_fields};

/// One logical CSV row: unescaped fields plus the 1-based row index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    index: u64,
    fields: Vec<String>,
}

impl RawRow {
    /// Creates a row from already unescaped fields.
    pub fn new(index: u64, fields: Vec<String>) -> Self {
        Self { index, fields }
    }

    /// 1-based logical row index in the source.
    pub fn index(&self) -> u64 {
        self.index
    }

    /// All fields in column order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Field at `column`, if the row is that wide.
    pub fn get(&self, column: usize) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// The column 0 label (row identifier or dimension label).
    pub fn label(&self) -> &str {
        self.get(0).unwrap_or_default()
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the row has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns true if every field is empty or whitespace.
    pub fn is_blank(&self) -> bool {
        self.fields.iter().all(|f| f.trim().is_empty())
    }

    /// Consumes the row and returns its fields.
    pub fn into_fields(self) -> Vec<String> {
        self.fields
    }
}

/// Forward-only reader producing [`RawRow`]s from a character stream.
///
/// The reader owns its source and drops it as soon as the stream is
/// exhausted or a read fails, so the sequence cannot be restarted.
///
/// # Example
///
/// ```
/// use reftab_ingest::TabularRecordReader;
///
/// let mut reader = TabularRecordReader::from_embedded("Crop,\"Note, with comma\"\nWheat,1.5\n");
/// let header = reader.next().unwrap().unwrap();
/// assert_eq!(header.fields(), ["Crop", "Note, with comma"]);
/// assert_eq!(reader.row_index(), 1);
/// ```
#[derive(Debug)]
pub struct TabularRecordReader<R> {
    source: Option<R>,
    row_index: u64,
    at_start: bool,
}

impl TabularRecordReader<BufReader<File>> {
    /// Opens a CSV file.
    ///
    /// Fails immediately with [`IngestError::SourceUnavailable`] if the file
    /// cannot be opened; no row is produced in that case.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| IngestError::SourceUnavailable {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<'a> TabularRecordReader<&'a [u8]> {
    /// Reads from text embedded in the binary (e.g. via `include_str!`).
    pub fn from_embedded(content: &'a str) -> Self {
        Self::new(content.as_bytes())
    }
}

impl<R: Read> TabularRecordReader<BufReader<R>> {
    /// Wraps an unbuffered reader.
    pub fn from_reader(reader: R) -> Self {
        Self::new(BufReader::new(reader))
    }
}

impl<R: BufRead> TabularRecordReader<R> {
    /// Creates a reader over a buffered source.
    pub fn new(source: R) -> Self {
        Self {
            source: Some(source),
            row_index: 0,
            at_start: true,
        }
    }

    /// Index of the last emitted logical row (0 before the first row).
    ///
    /// Continuation lines of a multi-line field do not advance it.
    pub fn row_index(&self) -> u64 {
        self.row_index
    }

    /// Returns true once the source has been released.
    pub fn is_finished(&self) -> bool {
        self.source.is_none()
    }
}

impl<R: BufRead> Iterator for TabularRecordReader<R> {
    type Item = Result<RawRow>;

    fn next(&mut self) -> Option<Self::Item> {
        let source = self.source.as_mut()?;

        match read_logical_line(source, &mut self.at_start) {
            Ok(Some(line)) => {
                self.row_index += 1;
                Some(Ok(RawRow::new(self.row_index, split_fields(&line))))
            }
            Ok(None) => {
                self.source = None;
                None
            }
            Err(e) => {
                self.source = None;
                Some(Err(IngestError::Read {
                    row: self.row_index,
                    source: e,
                }))
            }
        }
    }
}

impl<R: BufRead> FusedIterator for TabularRecordReader<R> {}

/// Reads one logical line, joining physical lines while a quote is open.
///
/// If the stream ends inside an open quote, the buffered text is returned
/// as-is so the final row is never dropped.
fn read_logical_line<R: BufRead>(
    source: &mut R,
    at_start: &mut bool,
) -> std::io::Result<Option<String>> {
    let Some(mut line) = read_physical_line(source)? else {
        return Ok(None);
    };

    // Skip BOM if present
    if std::mem::take(at_start)
        && let Some(stripped) = line.strip_prefix('\u{feff}')
    {
        line = stripped.to_string();
    }

    let mut state = QuoteState::Unquoted.scan(&line);
    let mut joined = 0usize;
    while state.is_open() {
        let Some(next) = read_physical_line(source)? else {
            tracing::warn!(
                continuation_lines = joined,
                "Quoted field still open at end of stream"
            );
            break;
        };
        state = state.scan(&next);
        line.push('\n');
        line.push_str(&next);
        joined += 1;
    }

    if joined > 0 {
        tracing::trace!(continuation_lines = joined, "Joined multi-line quoted field");
    }

    Ok(Some(line))
}

/// Reads one physical line without its terminator (`\n` or `\r\n`).
fn read_physical_line<R: BufRead>(source: &mut R) -> std::io::Result<Option<String>> {
    let mut buf = String::new();
    if source.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    if buf.ends_with('\n') {
        buf.pop();
        if buf.ends_with('\r') {
            buf.pop();
        }
    }
    Ok(Some(buf))
}
