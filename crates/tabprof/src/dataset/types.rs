//! Core type definitions for cells and column kinds.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Primitive classification of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Every non-missing cell is a real number (or not-a-number).
    Numeric,
    /// At least one non-missing cell is not a number.
    NonNumeric,
}

impl ColumnKind {
    /// Returns true if this kind participates in numeric aggregates.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnKind::Numeric)
    }

    /// Label used in column metadata.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnKind::Numeric => "numeric",
            ColumnKind::NonNumeric => "non_numeric",
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A single cell as rendered in a row preview.
///
/// Serializes untagged: numbers as JSON numbers, text as strings, and
/// `Missing` as `null`. A not-a-number cell also renders as `null`
/// because JSON has no NaN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Missing,
}

impl CellValue {
    /// Returns true for the missing sentinel.
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }
}
