//! tabprof: statistical profiling for delimited tabular data.
//!
//! Raw bytes go in, a serializable profile comes out: per-column
//! descriptive statistics, per-column metadata, a pairwise correlation
//! matrix over numeric columns and a short row preview.
//!
//! # Core Principles
//!
//! - **Stateless**: Every call builds and discards its own dataset
//! - **Explicit gaps**: Statistics that cannot be computed are `None`, never `0.0`
//! - **Two failure kinds**: Malformed input or an internal computation fault
//!
//! # Example
//!
//! ```
//! let result = tabprof::profile(b"x,label\n1,a\n2,b\n3,\n4,a\n").unwrap();
//!
//! assert_eq!(result.rows, 4);
//! assert_eq!(result.statistics["x"].mean, Some(2.5));
//! assert_eq!(result.column_info["label"].null, 1);
//! assert!(result.correlation.is_empty());
//! ```

pub mod dataset;
pub mod error;
pub mod inference;
pub mod input;
pub mod stats;

mod profiler;

pub use crate::profiler::{
    DEFAULT_PREVIEW_ROWS, ProfileResult, Profiler, ProfilerConfig, profile,
};
pub use dataset::{CellValue, Column, ColumnData, ColumnKind, Dataset};
pub use error::{MalformedInputError, ProfileError, Result};
pub use inference::ColumnClassifier;
pub use input::{DataTable, Parser, ParserConfig, SourceMetadata};
pub use stats::{
    ColumnMetadata, CorrelationMatrix, CorrelationPair, CorrelationStrength,
    DescriptiveStatistics,
};
