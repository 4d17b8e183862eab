//! Typed column storage.

use super::types::{CellValue, ColumnKind};

/// Cell storage for a classified column.
///
/// In a numeric column `None` is missing and `Some(NaN)` is an explicit
/// not-a-number cell. Both are excluded from numeric aggregates but only
/// `None` counts as null.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    Numeric(Vec<Option<f64>>),
    Text(Vec<Option<String>>),
}

/// A named, classified column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Column name from the header row.
    pub name: String,
    /// Classified cell values.
    pub data: ColumnData,
}

impl Column {
    /// Create a numeric column.
    pub fn numeric(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self {
            name: name.into(),
            data: ColumnData::Numeric(values),
        }
    }

    /// Create a non-numeric column.
    pub fn text(name: impl Into<String>, values: Vec<Option<String>>) -> Self {
        Self {
            name: name.into(),
            data: ColumnData::Text(values),
        }
    }

    /// The column kind.
    pub fn kind(&self) -> ColumnKind {
        match self.data {
            ColumnData::Numeric(_) => ColumnKind::Numeric,
            ColumnData::Text(_) => ColumnKind::NonNumeric,
        }
    }

    /// Number of cells, including missing ones.
    pub fn len(&self) -> usize {
        match &self.data {
            ColumnData::Numeric(v) => v.len(),
            ColumnData::Text(v) => v.len(),
        }
    }

    /// Returns true if the column has no cells.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of missing cells.
    pub fn missing_count(&self) -> usize {
        match &self.data {
            ColumnData::Numeric(v) => v.iter().filter(|c| c.is_none()).count(),
            ColumnData::Text(v) => v.iter().filter(|c| c.is_none()).count(),
        }
    }

    /// Numeric cells, if this column is numeric.
    pub fn as_numeric(&self) -> Option<&[Option<f64>]> {
        match &self.data {
            ColumnData::Numeric(v) => Some(v),
            ColumnData::Text(_) => None,
        }
    }

    /// Values usable in numeric aggregates: present and not NaN.
    /// Empty for non-numeric columns.
    pub fn valid_numbers(&self) -> impl Iterator<Item = f64> + '_ {
        self.as_numeric()
            .unwrap_or_default()
            .iter()
            .filter_map(|c| c.filter(|v| !v.is_nan()))
    }

    /// Get a cell for display.
    pub fn cell(&self, row: usize) -> CellValue {
        match &self.data {
            ColumnData::Numeric(v) => match v.get(row) {
                Some(Some(n)) => CellValue::Number(*n),
                _ => CellValue::Missing,
            },
            ColumnData::Text(v) => match v.get(row) {
                Some(Some(s)) => CellValue::Text(s.clone()),
                _ => CellValue::Missing,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_numbers_skip_missing_and_nan() {
        let col = Column::numeric("x", vec![Some(1.0), None, Some(f64::NAN), Some(3.0)]);

        assert_eq!(col.valid_numbers().collect::<Vec<_>>(), vec![1.0, 3.0]);
        assert_eq!(col.missing_count(), 1);
        assert_eq!(col.len(), 4);
    }

    #[test]
    fn test_text_column_cells() {
        let col = Column::text("name", vec![Some("a".into()), None]);

        assert_eq!(col.kind(), ColumnKind::NonNumeric);
        assert_eq!(col.cell(0), CellValue::Text("a".into()));
        assert_eq!(col.cell(1), CellValue::Missing);
        assert_eq!(col.valid_numbers().count(), 0);
    }
}
