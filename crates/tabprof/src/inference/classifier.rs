//! Numeric versus non-numeric column classification.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::dataset::{Column, Dataset};
use crate::error::Result;
use crate::input::DataTable;

// =============================================================================
// LAZY STATIC PATTERNS
// =============================================================================

/// Decimal or scientific notation with an optional sign.
static NUMBER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?$").unwrap()
});

/// Explicit not-a-number token.
static NAN_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?(?i:nan)$").unwrap());

/// Parse one cell as a number.
///
/// Returns `Some(NaN)` for an explicit not-a-number token, `Some(v)` for a
/// finite real literal, and `None` for anything else (including literals
/// that overflow to infinity).
pub fn parse_numeric(value: &str) -> Option<f64> {
    let trimmed = value.trim();

    if NAN_PATTERN.is_match(trimmed) {
        return Some(f64::NAN);
    }
    if !NUMBER_PATTERN.is_match(trimmed) {
        return None;
    }

    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Decides each column's kind from its entire value set.
#[derive(Debug, Clone, Default)]
pub struct ColumnClassifier;

impl ColumnClassifier {
    /// Create a new classifier.
    pub fn new() -> Self {
        Self
    }

    /// Classify every column of a parsed table and build the dataset.
    pub fn classify(&self, table: DataTable) -> Result<Dataset> {
        let columns: Vec<Column> = table
            .headers
            .into_iter()
            .zip(table.columns)
            .map(|(name, cells)| self.classify_column(name, cells))
            .collect();

        let numeric = columns.iter().filter(|c| c.kind().is_numeric()).count();
        debug!(
            numeric,
            non_numeric = columns.len() - numeric,
            "Classified columns"
        );

        Dataset::new(columns)
    }

    /// Classify a single column.
    ///
    /// A column is numeric iff every non-missing cell parses as a number;
    /// one non-numeric cell demotes the whole column and its text is kept
    /// verbatim. A column with no non-missing cells is numeric.
    pub fn classify_column(&self, name: String, cells: Vec<Option<String>>) -> Column {
        let parsed: Option<Vec<Option<f64>>> = cells
            .iter()
            .map(|cell| match cell {
                None => Some(None),
                Some(text) => parse_numeric(text).map(Some),
            })
            .collect();

        match parsed {
            Some(values) => Column::numeric(name, values),
            None => Column::text(name, cells),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{ColumnData, ColumnKind};

    fn cells(values: &[Option<&str>]) -> Vec<Option<String>> {
        values.iter().map(|v| v.map(String::from)).collect()
    }

    #[test]
    fn test_parse_numeric_literals() {
        assert_eq!(parse_numeric("42"), Some(42.0));
        assert_eq!(parse_numeric("-3.5"), Some(-3.5));
        assert_eq!(parse_numeric("+.5"), Some(0.5));
        assert_eq!(parse_numeric("5."), Some(5.0));
        assert_eq!(parse_numeric("1e3"), Some(1000.0));
        assert_eq!(parse_numeric("2.5E-1"), Some(0.25));
        assert_eq!(parse_numeric(" 7 "), Some(7.0));
    }

    #[test]
    fn test_parse_numeric_rejects_text() {
        assert_eq!(parse_numeric("abc"), None);
        assert_eq!(parse_numeric("1,000"), None);
        assert_eq!(parse_numeric("0x10"), None);
        assert_eq!(parse_numeric("inf"), None);
        assert_eq!(parse_numeric("Infinity"), None);
        assert_eq!(parse_numeric("1e400"), None);
        assert_eq!(parse_numeric("."), None);
        assert_eq!(parse_numeric("e5"), None);
        assert_eq!(parse_numeric(""), None);
    }

    #[test]
    fn test_parse_nan_token() {
        assert!(parse_numeric("NaN").unwrap().is_nan());
        assert!(parse_numeric("nan").unwrap().is_nan());
        assert!(parse_numeric("-NAN").unwrap().is_nan());
    }

    #[test]
    fn test_numeric_column_with_missing() {
        let col = ColumnClassifier::new()
            .classify_column("v".into(), cells(&[Some("1"), None, Some("2.5")]));

        assert_eq!(col.kind(), ColumnKind::Numeric);
        assert_eq!(col.data, ColumnData::Numeric(vec![Some(1.0), None, Some(2.5)]));
    }

    #[test]
    fn test_single_text_value_demotes_column() {
        let input = cells(&[Some("1"), Some("2"), Some("three")]);
        let col = ColumnClassifier::new().classify_column("v".into(), input.clone());

        assert_eq!(col.kind(), ColumnKind::NonNumeric);
        assert_eq!(col.data, ColumnData::Text(input));
    }

    #[test]
    fn test_all_missing_is_numeric() {
        let col = ColumnClassifier::new().classify_column("empty".into(), cells(&[None, None]));
        assert_eq!(col.kind(), ColumnKind::Numeric);
    }

    #[test]
    fn test_nan_keeps_column_numeric() {
        let col = ColumnClassifier::new()
            .classify_column("v".into(), cells(&[Some("NaN"), Some("4")]));

        assert_eq!(col.kind(), ColumnKind::Numeric);
        assert_eq!(col.missing_count(), 0);
        assert_eq!(col.valid_numbers().collect::<Vec<_>>(), vec![4.0]);
    }
}
