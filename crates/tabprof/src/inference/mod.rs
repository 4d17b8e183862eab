//! Column type inference.

mod classifier;

pub use classifier::{ColumnClassifier, parse_numeric};
