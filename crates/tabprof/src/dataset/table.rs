//! Rectangular, classified dataset.

use std::collections::HashSet;

use indexmap::IndexMap;

use super::column::Column;
use super::types::CellValue;
use crate::error::{MalformedInputError, Result};

/// A preview row: column name to cell, in column order.
pub type PreviewRow = IndexMap<String, CellValue>;

/// An ordered set of uniquely named columns of equal length.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    columns: Vec<Column>,
    row_count: usize,
}

impl Dataset {
    /// Build a dataset, rejecting duplicate names and unequal column lengths.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let row_count = columns.first().map(Column::len).unwrap_or(0);

        let mut names = HashSet::with_capacity(columns.len());
        for (position, column) in columns.iter().enumerate() {
            if !names.insert(column.name.as_str()) {
                return Err(MalformedInputError::DuplicateColumn {
                    name: column.name.clone(),
                    position,
                }
                .into());
            }
            if column.len() != row_count {
                return Err(MalformedInputError::ColumnLength {
                    column: column.name.clone(),
                    expected: row_count,
                    found: column.len(),
                }
                .into());
            }
        }

        Ok(Self { columns, row_count })
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// All columns in order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Get a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Get all column names.
    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    /// Numeric columns in first-encountered order.
    pub fn numeric_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|c| c.kind().is_numeric())
    }

    /// The first `limit` rows as name-to-cell maps.
    pub fn preview(&self, limit: usize) -> Vec<PreviewRow> {
        (0..self.row_count.min(limit))
            .map(|row| {
                self.columns
                    .iter()
                    .map(|c| (c.name.clone(), c.cell(row)))
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProfileError;

    #[test]
    fn test_rejects_unequal_lengths() {
        let err = Dataset::new(vec![
            Column::numeric("a", vec![Some(1.0), Some(2.0)]),
            Column::numeric("b", vec![Some(1.0)]),
        ])
        .unwrap_err();

        assert!(matches!(
            err,
            ProfileError::MalformedInput(MalformedInputError::ColumnLength { found: 1, .. })
        ));
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let err = Dataset::new(vec![
            Column::numeric("a", vec![]),
            Column::text("a", vec![]),
        ])
        .unwrap_err();

        assert!(err.is_malformed_input());
    }

    #[test]
    fn test_preview_keeps_missing() {
        let ds = Dataset::new(vec![
            Column::numeric("x", vec![Some(1.0), None, Some(3.0)]),
            Column::text("y", vec![None, Some("b".into()), Some("c".into())]),
        ])
        .unwrap();

        let preview = ds.preview(2);
        assert_eq!(preview.len(), 2);
        assert_eq!(preview[0]["x"], CellValue::Number(1.0));
        assert_eq!(preview[0]["y"], CellValue::Missing);
        assert_eq!(preview[1]["x"], CellValue::Missing);

        let keys: Vec<&String> = preview[0].keys().collect();
        assert_eq!(keys, vec!["x", "y"]);
    }
}
