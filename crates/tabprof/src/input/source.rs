//! Raw parsed table and source metadata.

use serde::{Deserialize, Serialize};

/// Metadata about the source bytes.
///
/// Deliberately free of timestamps and paths so that profiling the same
/// bytes twice yields identical output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// SHA-256 hash of the raw bytes.
    pub hash: String,
    /// Input size in bytes.
    pub size_bytes: u64,
    /// Format derived from the delimiter (csv, tsv, etc.).
    pub format: String,
    /// Text encoding of the input.
    pub encoding: String,
    /// Number of data rows (excluding header).
    pub row_count: usize,
    /// Number of columns.
    pub column_count: usize,
}

impl SourceMetadata {
    /// Create metadata for input that has been parsed.
    pub fn new(
        hash: String,
        size_bytes: u64,
        delimiter: u8,
        row_count: usize,
        column_count: usize,
    ) -> Self {
        let format = match delimiter {
            b'\t' => "tsv",
            b',' => "csv",
            b';' => "csv-semicolon",
            b'|' => "psv",
            _ => "delimited",
        }
        .to_string();

        Self {
            hash,
            size_bytes,
            format,
            encoding: "utf-8".to_string(),
            row_count,
            column_count,
        }
    }
}

/// Parsed tabular data before type classification.
///
/// Stored column-major. A `None` cell is missing; every `Some` cell holds
/// the field text exactly as it appeared in the input.
#[derive(Debug, Clone)]
pub struct DataTable {
    /// Column headers, in input order.
    pub headers: Vec<String>,
    /// Cell text per column.
    pub columns: Vec<Vec<Option<String>>>,
    /// The delimiter used.
    pub delimiter: u8,
    row_count: usize,
}

impl DataTable {
    /// Create an empty table with the given headers.
    pub fn new(headers: Vec<String>, delimiter: u8) -> Self {
        let columns = vec![Vec::new(); headers.len()];
        Self {
            headers,
            columns,
            delimiter,
            row_count: 0,
        }
    }

    /// Append one row. The caller guarantees the row width matches the header.
    pub(crate) fn push_row(&mut self, cells: impl IntoIterator<Item = Option<String>>) {
        for (column, cell) in self.columns.iter_mut().zip(cells) {
            column.push(cell);
        }
        self.row_count += 1;
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Get the number of rows (excluding header).
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Get a column by name.
    pub fn column_by_name(&self, name: &str) -> Option<&[Option<String>]> {
        let index = self.headers.iter().position(|h| h == name)?;
        self.columns.get(index).map(Vec::as_slice)
    }

    /// Get a specific cell. Returns `None` when out of range or missing.
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.columns
            .get(col)
            .and_then(|c| c.get(row))
            .and_then(|cell| cell.as_deref())
    }
}
