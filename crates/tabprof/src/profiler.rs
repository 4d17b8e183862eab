//! Main profiler struct and public API.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::dataset::{Dataset, PreviewRow};
use crate::error::Result;
use crate::inference::ColumnClassifier;
use crate::input::{Parser, ParserConfig, SourceMetadata};
use crate::stats::{
    ColumnMetadata, CorrelationMatrix, DescriptiveStatistics, correlation, descriptive, metadata,
};

/// Default number of rows in the preview.
pub const DEFAULT_PREVIEW_ROWS: usize = 10;

/// Configuration for profiling.
#[derive(Debug, Clone)]
pub struct ProfilerConfig {
    /// Parser configuration.
    pub parser: ParserConfig,
    /// Number of leading rows to include in the preview.
    pub preview_rows: usize,
    /// Run the statistics, correlation and metadata stages on the rayon pool.
    pub parallel: bool,
}

impl Default for ProfilerConfig {
    fn default() -> Self {
        Self {
            parser: ParserConfig::default(),
            preview_rows: DEFAULT_PREVIEW_ROWS,
            parallel: false,
        }
    }
}

/// Profile of one dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileResult {
    /// Fingerprint of the input bytes.
    pub source: SourceMetadata,
    /// Number of data rows.
    pub rows: usize,
    /// Number of columns.
    pub columns: usize,
    /// Column names in input order.
    pub column_names: Vec<String>,
    /// Descriptive statistics per numeric column.
    pub statistics: IndexMap<String, DescriptiveStatistics>,
    /// Metadata per column.
    pub column_info: IndexMap<String, ColumnMetadata>,
    /// Correlation over numeric columns (empty if fewer than two).
    pub correlation: CorrelationMatrix,
    /// Leading rows; missing cells are `null`.
    pub sample_data: Vec<PreviewRow>,
}

/// Stateless profiling engine.
///
/// Holds only configuration, so one instance can serve any number of
/// concurrent calls.
#[derive(Debug, Clone)]
pub struct Profiler {
    config: ProfilerConfig,
    parser: Parser,
    classifier: ColumnClassifier,
}

impl Profiler {
    /// Create a new profiler with default configuration.
    pub fn new() -> Self {
        Self::with_config(ProfilerConfig::default())
    }

    /// Create a profiler with custom configuration.
    pub fn with_config(config: ProfilerConfig) -> Self {
        let parser = Parser::with_config(config.parser.clone());

        Self {
            config,
            parser,
            classifier: ColumnClassifier::new(),
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &ProfilerConfig {
        &self.config
    }

    /// Profile raw delimited bytes.
    pub fn profile(&self, bytes: &[u8]) -> Result<ProfileResult> {
        let (table, source) = self.parser.parse_bytes(bytes)?;
        let dataset = self.classifier.classify(table)?;

        let result = self.profile_dataset(&dataset, source)?;

        info!(
            rows = result.rows,
            columns = result.columns,
            numeric = result.statistics.len(),
            "Profiled dataset"
        );

        Ok(result)
    }

    /// Profile an already classified dataset.
    pub fn profile_dataset(
        &self,
        dataset: &Dataset,
        source: SourceMetadata,
    ) -> Result<ProfileResult> {
        let (statistics, correlation, column_info) = if self.config.parallel {
            let (statistics, (correlation, column_info)) = rayon::join(
                || descriptive::describe_dataset(dataset),
                || {
                    rayon::join(
                        || correlation::correlation_matrix(dataset),
                        || metadata::profile_columns(dataset),
                    )
                },
            );
            (statistics?, correlation?, column_info)
        } else {
            (
                descriptive::describe_dataset(dataset)?,
                correlation::correlation_matrix(dataset)?,
                metadata::profile_columns(dataset),
            )
        };

        debug!(
            correlated = correlation.len(),
            parallel = self.config.parallel,
            "Computed profile stages"
        );

        Ok(ProfileResult {
            source,
            rows: dataset.row_count(),
            columns: dataset.column_count(),
            column_names: dataset.column_names(),
            statistics,
            column_info,
            correlation,
            sample_data: dataset.preview(self.config.preview_rows),
        })
    }
}

impl Default for Profiler {
    fn default() -> Self {
        Self::new()
    }
}

/// Profile raw bytes with the default configuration.
pub fn profile(bytes: &[u8]) -> Result<ProfileResult> {
    Profiler::new().profile(bytes)
}
