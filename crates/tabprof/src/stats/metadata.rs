//! Per-column cardinality, null and footprint metadata.

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::dataset::{Column, ColumnData, ColumnKind, Dataset};

/// Bytes charged per cell slot.
const SLOT_BYTES: usize = 8;

/// Metadata for any column, numeric or not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnMetadata {
    /// Classifier outcome.
    #[serde(rename = "type")]
    pub kind: ColumnKind,
    /// Cells that are not missing.
    pub non_null: usize,
    /// Missing cells.
    pub null: usize,
    /// Distinct non-missing values.
    pub unique: usize,
    /// Approximate footprint in KiB.
    pub memory_usage: f64,
    /// Percentage of cells that are not missing.
    pub completeness: f64,
}

/// Profile a single column. Never fails.
///
/// Numeric values are compared as numbers (`-0.0` equals `0.0`, every NaN
/// is one value); text is compared exactly. Memory is one 8-byte slot per
/// cell plus, for text columns, the UTF-8 length of each present value.
pub fn profile_column(column: &Column) -> ColumnMetadata {
    let len = column.len();
    let null = column.missing_count();
    let non_null = len - null;

    let (unique, bytes) = match &column.data {
        ColumnData::Numeric(values) => {
            let distinct: HashSet<u64> = values
                .iter()
                .flatten()
                .map(|v| canonical_bits(*v))
                .collect();
            (distinct.len(), len * SLOT_BYTES)
        }
        ColumnData::Text(values) => {
            let distinct: HashSet<&str> = values.iter().flatten().map(String::as_str).collect();
            let payload: usize = values.iter().flatten().map(String::len).sum();
            (distinct.len(), len * SLOT_BYTES + payload)
        }
    };

    let completeness = if len == 0 {
        0.0
    } else {
        non_null as f64 * 100.0 / len as f64
    };

    ColumnMetadata {
        kind: column.kind(),
        non_null,
        null,
        unique,
        memory_usage: bytes as f64 / 1024.0,
        completeness,
    }
}

/// Profile every column, keyed by name in column order.
pub fn profile_columns(dataset: &Dataset) -> IndexMap<String, ColumnMetadata> {
    dataset
        .columns()
        .iter()
        .map(|column| (column.name.clone(), profile_column(column)))
        .collect()
}

/// Bit pattern under which equal numbers hash equally.
fn canonical_bits(value: f64) -> u64 {
    if value.is_nan() {
        f64::NAN.to_bits()
    } else if value == 0.0 {
        0.0f64.to_bits()
    } else {
        value.to_bits()
    }
}
