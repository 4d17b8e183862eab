//! Descriptive statistics for numeric columns.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::dataset::{Column, Dataset};
use crate::error::{ProfileError, Result};

/// Summary statistics for one numeric column.
///
/// Every field except `count` is `None` when it cannot be computed:
/// all of them for an empty column, and `std` for a single value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptiveStatistics {
    /// Number of values used (present and not NaN).
    pub count: usize,
    pub mean: Option<f64>,
    /// Sample standard deviation (N-1 divisor).
    pub std: Option<f64>,
    pub min: Option<f64>,
    /// First quartile.
    #[serde(rename = "25%")]
    pub p25: Option<f64>,
    /// Median.
    #[serde(rename = "50%")]
    pub p50: Option<f64>,
    /// Third quartile.
    #[serde(rename = "75%")]
    pub p75: Option<f64>,
    pub max: Option<f64>,
}

impl DescriptiveStatistics {
    /// Statistics for a column with no usable values.
    pub fn undefined() -> Self {
        Self {
            count: 0,
            mean: None,
            std: None,
            min: None,
            p25: None,
            p50: None,
            p75: None,
            max: None,
        }
    }

    /// Returns true if at least one value contributed.
    pub fn is_defined(&self) -> bool {
        self.count > 0
    }

    /// Calculate the interquartile range.
    pub fn iqr(&self) -> Option<f64> {
        Some(self.p75? - self.p25?)
    }
}

// =============================================================================
// RUNNING MOMENTS
// =============================================================================
// Welford's online algorithm for computing mean and variance in a single pass.
// Values are accumulated in units of `scale`, the largest magnitude seen.

#[derive(Debug, Clone)]
struct RunningMoments {
    count: usize,
    scale: f64,
    mean: f64, // In units of `scale`
    m2: f64,   // Sum of squared differences from mean, in units of `scale`
    min: f64,
    max: f64,
}

impl RunningMoments {
    fn with_scale(scale: f64) -> Self {
        Self {
            count: 0,
            scale: if scale > 0.0 { scale } else { 1.0 },
            mean: 0.0,
            m2: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    fn add(&mut self, value: f64) {
        self.count += 1;

        let scaled = value / self.scale;
        let delta = scaled - self.mean;
        self.mean += delta / self.count as f64;
        let delta2 = scaled - self.mean;
        self.m2 += delta * delta2;

        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }

    fn mean(&self) -> f64 {
        self.mean * self.scale
    }

    /// Sample standard deviation; undefined below two values.
    fn sample_std(&self) -> Option<f64> {
        if self.count < 2 {
            None
        } else {
            Some((self.m2 / (self.count - 1) as f64).sqrt() * self.scale)
        }
    }
}

/// Percentile by linear interpolation between order statistics.
///
/// `sorted` must be ascending and `p` in `[0, 1]`. The fractional rank is
/// `p * (n - 1)`.
pub fn percentile(sorted: &[f64], p: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }

    let rank = p.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;

    if lo == hi {
        return Some(sorted[lo]);
    }

    let (below, above) = (sorted[lo], sorted[hi]);
    let fraction = rank - lo as f64;
    let span = above - below;
    let value = if span.is_finite() {
        below + span * fraction
    } else {
        below * (1.0 - fraction) + above * fraction
    };

    Some(value.clamp(below, above))
}

/// Compute descriptive statistics for one column.
///
/// Non-numeric columns yield the undefined record. Fails only if a
/// statistic is itself too large for an `f64`.
pub fn describe(column: &Column) -> Result<DescriptiveStatistics> {
    let mut values: Vec<f64> = column.valid_numbers().collect();
    if values.is_empty() {
        return Ok(DescriptiveStatistics::undefined());
    }

    let scale = values.iter().fold(0.0_f64, |m, v| m.max(v.abs()));
    let mut moments = RunningMoments::with_scale(scale);
    for &value in &values {
        moments.add(value);
    }

    values.sort_by(f64::total_cmp);

    let stats = DescriptiveStatistics {
        count: moments.count,
        mean: Some(moments.mean()),
        std: moments.sample_std(),
        min: Some(moments.min),
        p25: percentile(&values, 0.25),
        p50: percentile(&values, 0.50),
        p75: percentile(&values, 0.75),
        max: Some(moments.max),
    };

    ensure_finite(&column.name, &stats)?;
    Ok(stats)
}

/// Compute statistics for every numeric column, keyed by name in column order.
pub fn describe_dataset(dataset: &Dataset) -> Result<IndexMap<String, DescriptiveStatistics>> {
    dataset
        .numeric_columns()
        .map(|column| Ok((column.name.clone(), describe(column)?)))
        .collect()
}

fn ensure_finite(column: &str, stats: &DescriptiveStatistics) -> Result<()> {
    let fields = [
        ("mean", stats.mean),
        ("std", stats.std),
        ("min", stats.min),
        ("25%", stats.p25),
        ("50%", stats.p50),
        ("75%", stats.p75),
        ("max", stats.max),
    ];

    match fields
        .iter()
        .find(|(_, value)| value.is_some_and(|v| !v.is_finite()))
    {
        Some((name, _)) => Err(ProfileError::internal(format!(
            "statistic '{name}' of column '{column}' is not finite"
        ))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Option<f64>, expected: f64) {
        let actual = actual.expect("statistic should be defined");
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_describe_one_to_four() {
        let col = Column::numeric("x", vec![Some(1.0), Some(2.0), Some(3.0), Some(4.0)]);
        let stats = describe(&col).unwrap();

        assert_eq!(stats.count, 4);
        assert_close(stats.mean, 2.5);
        assert_close(stats.std, 1.2909944487358056);
        assert_close(stats.min, 1.0);
        assert_close(stats.p25, 1.75);
        assert_close(stats.p50, 2.5);
        assert_close(stats.p75, 3.25);
        assert_close(stats.max, 4.0);
    }

    #[test]
    fn test_missing_and_nan_are_excluded() {
        let col = Column::numeric("x", vec![Some(2.0), None, Some(f64::NAN), Some(4.0)]);
        let stats = describe(&col).unwrap();

        assert_eq!(stats.count, 2);
        assert_close(stats.mean, 3.0);
    }

    #[test]
    fn test_single_value_has_no_std() {
        let col = Column::numeric("x", vec![Some(7.0)]);
        let stats = describe(&col).unwrap();

        assert_eq!(stats.count, 1);
        assert_eq!(stats.std, None);
        assert_close(stats.mean, 7.0);
        assert_close(stats.p25, 7.0);
        assert_close(stats.p75, 7.0);
    }

    #[test]
    fn test_empty_column_is_undefined() {
        let col = Column::numeric("x", vec![None, None]);
        let stats = describe(&col).unwrap();

        assert_eq!(stats, DescriptiveStatistics::undefined());
        assert!(!stats.is_defined());
        assert_eq!(stats.iqr(), None);
    }

    #[test]
    fn test_percentile_interpolation() {
        let sorted = [10.0, 20.0, 30.0];
        assert_eq!(percentile(&sorted, 0.0), Some(10.0));
        assert_eq!(percentile(&sorted, 0.5), Some(20.0));
        assert_eq!(percentile(&sorted, 0.25), Some(15.0));
        assert_eq!(percentile(&sorted, 1.0), Some(30.0));
        assert_eq!(percentile(&[], 0.5), None);
    }

    #[test]
    fn test_unsorted_input() {
        let col = Column::numeric("x", vec![Some(9.0), Some(1.0), Some(5.0)]);
        let stats = describe(&col).unwrap();

        assert_close(stats.min, 1.0);
        assert_close(stats.p50, 5.0);
        assert_close(stats.max, 9.0);
    }

    #[test]
    fn test_large_magnitudes_stay_finite() {
        let col = Column::numeric("x", vec![Some(1e200), Some(-1e200), Some(3e200)]);
        let stats = describe(&col).unwrap();

        let mean = stats.mean.unwrap();
        let std = stats.std.unwrap();
        assert!((mean / 1e200 - 1.0).abs() < 1e-12);
        assert!((std / 2e200 - 1.0).abs() < 1e-12);
        assert_eq!(stats.p50, Some(1e200));
    }

    #[test]
    fn test_tiny_magnitudes_keep_spread() {
        let col = Column::numeric("x", vec![Some(1e-200), Some(2e-200), Some(3e-200)]);
        let stats = describe(&col).unwrap();

        assert!((stats.mean.unwrap() / 2e-200 - 1.0).abs() < 1e-12);
        assert!((stats.std.unwrap() / 1e-200 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_percentile_across_full_range() {
        let sorted = [-f64::MAX, f64::MAX];
        let p50 = percentile(&sorted, 0.5).unwrap();

        assert!(p50.is_finite());
        assert!(p50.abs() < 1e300);
        assert_eq!(percentile(&[2.0, 2.0], 0.25), Some(2.0));
    }

    #[test]
    fn test_overflow_is_internal_error() {
        let col = Column::numeric("x", vec![Some(f64::MAX), Some(-f64::MAX)]);
        let err = describe(&col).unwrap_err();

        assert!(matches!(err, ProfileError::InternalComputation(_)));
    }

    #[test]
    fn test_serialized_keys() {
        let col = Column::numeric("x", vec![Some(1.0)]);
        let json = serde_json::to_value(describe(&col).unwrap()).unwrap();

        assert_eq!(json["25%"], 1.0);
        assert!(json["std"].is_null());
    }
}
