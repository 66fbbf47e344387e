//! Pairwise-complete Pearson correlation matrix

use rights_core::descriptive::is_constant;
use rights_core::{JoinedTable, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::encoding::Encoding;

/// Square, symmetric correlation matrix over an ordered indicator list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    indicators: Vec<String>,
    /// Row-major coefficients; `None` where the pair cannot be correlated
    coefficients: Vec<Option<f64>>,
    /// Row-major count of jointly observed rows per pair
    observations: Vec<usize>,
}

impl CorrelationMatrix {
    pub fn indicators(&self) -> &[String] {
        &self.indicators
    }

    /// Number of indicators (rows and columns)
    pub fn len(&self) -> usize {
        self.indicators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indicators.is_empty()
    }

    /// Coefficient at (`row`, `col`); `None` if missing or out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.index(row, col).and_then(|i| self.coefficients[i])
    }

    /// Coefficient for a named indicator pair
    pub fn get_by_name(&self, a: &str, b: &str) -> Option<f64> {
        let row = self.position(a)?;
        let col = self.position(b)?;
        self.get(row, col)
    }

    /// Jointly observed rows behind (`row`, `col`)
    pub fn observations(&self, row: usize, col: usize) -> Option<usize> {
        self.index(row, col).map(|i| self.observations[i])
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.indicators.iter().position(|i| i == name)
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        let n = self.len();
        (row < n && col < n).then_some(row * n + col)
    }
}

/// Correlate every pair of `indicators` over the joined rows.
///
/// Each column is encoded with `encoding`. A row missing either value of a
/// pair is dropped from that pair only. The diagonal is 1.0 for columns with
/// at least two observed values; an off-diagonal entry is missing when fewer
/// than two rows are jointly observed or either side is constant.
#[instrument(skip_all, fields(rows = joined.len(), indicators = indicators.len()))]
pub fn correlation_matrix<S: AsRef<str>>(
    joined: &JoinedTable,
    indicators: &[S],
    encoding: &Encoding,
) -> Result<CorrelationMatrix> {
    for name in indicators {
        joined.ensure_indicator(name.as_ref())?;
    }

    let columns: Vec<Vec<Option<f64>>> = indicators
        .iter()
        .map(|name| {
            joined
                .rows()
                .iter()
                .map(|row| encoding.encode(row.value(name.as_ref())))
                .collect()
        })
        .collect();

    let n = columns.len();
    let mut coefficients = vec![None; n * n];
    let mut observations = vec![0; n * n];

    for i in 0..n {
        let observed = columns[i].iter().filter(|v| v.is_some()).count();
        observations[i * n + i] = observed;
        coefficients[i * n + i] = (observed >= 2).then_some(1.0);

        for j in (i + 1)..n {
            let (r, count) = pairwise_pearson(&columns[i], &columns[j]);
            coefficients[i * n + j] = r;
            coefficients[j * n + i] = r;
            observations[i * n + j] = count;
            observations[j * n + i] = count;
        }
    }

    let missing = coefficients.iter().filter(|c| c.is_none()).count();
    debug!("Correlation matrix {}x{} with {} missing entries", n, n, missing);

    Ok(CorrelationMatrix {
        indicators: indicators.iter().map(|s| s.as_ref().to_string()).collect(),
        coefficients,
        observations,
    })
}

/// Pearson correlation over rows where both values are present.
///
/// Returns the coefficient (clamped to [-1, 1]) and the number of complete
/// pairs used.
pub fn pairwise_pearson(x: &[Option<f64>], y: &[Option<f64>]) -> (Option<f64>, usize) {
    let (xs, ys): (Vec<f64>, Vec<f64>) = x
        .iter()
        .zip(y)
        .filter_map(|(a, b)| Some(((*a)?, (*b)?)))
        .unzip();
    let count = xs.len();
    (pearson_correlation(&xs, &ys), count)
}

fn pearson_correlation(x: &[f64], y: &[f64]) -> Option<f64> {
    if x.len() < 2 || is_constant(x) || is_constant(y) {
        return None;
    }

    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut numerator = 0.0;
    let mut sum_sq_x = 0.0;
    let mut sum_sq_y = 0.0;

    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;

        numerator += dx * dy;
        sum_sq_x += dx * dx;
        sum_sq_y += dy * dy;
    }

    let denominator = (sum_sq_x * sum_sq_y).sqrt();
    if denominator == 0.0 {
        return None;
    }

    Some((numerator / denominator).clamp(-1.0, 1.0))
}
