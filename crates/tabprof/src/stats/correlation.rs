//! Pairwise-complete Pearson correlation over numeric columns.

use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::error::{ProfileError, Result};

/// Thresholds for labelling a coefficient.
const STRONG_THRESHOLD: f64 = 0.7;
const MODERATE_THRESHOLD: f64 = 0.4;

/// Qualitative strength of a correlation coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrelationStrength {
    Strong,
    Moderate,
    Weak,
}

impl CorrelationStrength {
    /// Classify by absolute value: above 0.7 is strong, above 0.4 moderate.
    pub fn classify(r: f64) -> Self {
        let magnitude = r.abs();
        if magnitude > STRONG_THRESHOLD {
            CorrelationStrength::Strong
        } else if magnitude > MODERATE_THRESHOLD {
            CorrelationStrength::Moderate
        } else {
            CorrelationStrength::Weak
        }
    }
}

/// One off-diagonal entry of the matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationPair {
    pub left: String,
    pub right: String,
    /// `None` when the coefficient is undefined.
    pub r: Option<f64>,
}

impl CorrelationPair {
    /// Strength label, if the coefficient is defined.
    pub fn strength(&self) -> Option<CorrelationStrength> {
        self.r.map(CorrelationStrength::classify)
    }
}

/// Square correlation matrix indexed by numeric column order.
///
/// Empty when the dataset has fewer than two numeric columns. Diagonal
/// entries are always `Some(1.0)`; an off-diagonal entry is `None` when
/// fewer than two rows are jointly present or either side has zero
/// variance over those rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    /// Row/column labels.
    pub columns: Vec<String>,
    /// Coefficients, row-major.
    pub matrix: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    /// The empty matrix.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns true if no correlations were computed.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Number of rows (and columns).
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Coefficient at a position.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.matrix.get(i).and_then(|row| row.get(j)).copied().flatten()
    }

    /// Coefficient between two named columns.
    pub fn get_by_name(&self, left: &str, right: &str) -> Option<f64> {
        let i = self.columns.iter().position(|c| c == left)?;
        let j = self.columns.iter().position(|c| c == right)?;
        self.get(i, j)
    }

    /// Upper-triangle entries in row order.
    pub fn pairs(&self) -> impl Iterator<Item = CorrelationPair> + '_ {
        let n = self.len();
        (0..n).flat_map(move |i| {
            ((i + 1)..n).map(move |j| CorrelationPair {
                left: self.columns[i].clone(),
                right: self.columns[j].clone(),
                r: self.get(i, j),
            })
        })
    }

    /// Defined pairs with `|r| > threshold`, strongest first.
    pub fn strong_pairs(&self, threshold: f64) -> Vec<CorrelationPair> {
        let mut pairs: Vec<CorrelationPair> = self
            .pairs()
            .filter(|p| p.r.is_some_and(|r| r.abs() > threshold))
            .collect();

        pairs.sort_by(|a, b| {
            let a = a.r.unwrap_or(0.0).abs();
            let b = b.r.unwrap_or(0.0).abs();
            b.total_cmp(&a)
        });
        pairs
    }
}

/// Pearson correlation over rows where both cells are present and not NaN.
///
/// Returns `Ok(None)` for fewer than two such rows or zero variance on
/// either side. Fails only if the coefficient comes out non-finite.
pub fn pearson_pairwise(x: &[Option<f64>], y: &[Option<f64>]) -> Result<Option<f64>> {
    let joint: Vec<(f64, f64)> = x
        .iter()
        .zip(y)
        .filter_map(|(a, b)| match (a, b) {
            (Some(a), Some(b)) if !a.is_nan() && !b.is_nan() => Some((*a, *b)),
            _ => None,
        })
        .collect();

    if joint.len() < 2
        || is_constant(joint.iter().map(|p| p.0))
        || is_constant(joint.iter().map(|p| p.1))
    {
        return Ok(None);
    }

    let dx = unit_deviations(joint.iter().map(|p| p.0));
    let dy = unit_deviations(joint.iter().map(|p| p.1));

    let (mut sxx, mut syy, mut sxy) = (0.0, 0.0, 0.0);
    for (a, b) in dx.iter().zip(&dy) {
        sxx += a * a;
        syy += b * b;
        sxy += a * b;
    }

    if sxx == 0.0 || syy == 0.0 {
        return Ok(None);
    }

    let r = sxy / (sxx.sqrt() * syy.sqrt());
    if !r.is_finite() {
        return Err(ProfileError::internal(
            "correlation coefficient is not finite",
        ));
    }

    Ok(Some(r.clamp(-1.0, 1.0)))
}

/// Build the correlation matrix for all numeric columns of a dataset.
pub fn correlation_matrix(dataset: &Dataset) -> Result<CorrelationMatrix> {
    let numeric: Vec<(&str, &[Option<f64>])> = dataset
        .numeric_columns()
        .filter_map(|c| c.as_numeric().map(|values| (c.name.as_str(), values)))
        .collect();

    if numeric.len() < 2 {
        return Ok(CorrelationMatrix::empty());
    }

    let n = numeric.len();
    let mut matrix = vec![vec![None; n]; n];

    for i in 0..n {
        matrix[i][i] = Some(1.0);
        for j in (i + 1)..n {
            let r = pearson_pairwise(numeric[i].1, numeric[j].1).map_err(|e| match e {
                ProfileError::InternalComputation(msg) => ProfileError::internal(format!(
                    "{msg} ('{}' vs '{}')",
                    numeric[i].0, numeric[j].0
                )),
                other => other,
            })?;
            matrix[i][j] = r;
            matrix[j][i] = r;
        }
    }

    Ok(CorrelationMatrix {
        columns: numeric.iter().map(|(name, _)| name.to_string()).collect(),
        matrix,
    })
}

/// Deviations from the mean, rescaled so the largest has magnitude 1.
///
/// Pearson's r is invariant under positive scaling of either side, and the
/// rescaling keeps both very large and very small inputs in range.
fn unit_deviations(values: impl Iterator<Item = f64>) -> Vec<f64> {
    let values: Vec<f64> = values.collect();
    let scale = max_magnitude(&values);
    if scale == 0.0 {
        return vec![0.0; values.len()];
    }

    let mean = values.iter().map(|v| v / scale).sum::<f64>() / values.len() as f64;
    let deviations: Vec<f64> = values.iter().map(|v| v / scale - mean).collect();

    let spread = max_magnitude(&deviations);
    if spread == 0.0 {
        return deviations;
    }
    deviations.into_iter().map(|d| d / spread).collect()
}

fn max_magnitude(values: &[f64]) -> f64 {
    values.iter().fold(0.0_f64, |m, v| m.max(v.abs()))
}

fn is_constant(mut values: impl Iterator<Item = f64>) -> bool {
    match values.next() {
        Some(first) => values.all(|v| v == first),
        None => true,
    }
}
