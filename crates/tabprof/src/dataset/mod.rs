//! Typed columnar representation of a parsed table.

mod column;
mod table;
mod types;

pub use column::{Column, ColumnData};
pub use table::{Dataset, PreviewRow};
pub use types::{CellValue, ColumnKind};
