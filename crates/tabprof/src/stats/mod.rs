//! Statistical profiling stages over a classified dataset.
//!
//! Each stage reads the immutable [`Dataset`](crate::dataset::Dataset) and
//! shares no state with the others, so they can run in any order or in
//! parallel.

pub mod correlation;
pub mod descriptive;
pub mod metadata;

pub use correlation::{CorrelationMatrix, CorrelationPair, CorrelationStrength};
pub use descriptive::DescriptiveStatistics;
pub use metadata::ColumnMetadata;
