//! Descriptive helpers over plain `f64` samples

use statrs::statistics::Statistics;

use crate::{Error, Result};

/// Arithmetic mean; NaN for an empty sample, never zero
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.mean()
}

/// Unbiased (n - 1) sample variance; NaN below two observations
pub fn sample_variance(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    values.variance()
}

/// True when every value equals the first; false for an empty sample.
///
/// Streaming variance leaves rounding residue on constant samples, so zero
/// spread is decided here by exact comparison.
pub fn is_constant(values: &[f64]) -> bool {
    match values.split_first() {
        Some((first, rest)) => rest.iter().all(|v| v == first),
        None => false,
    }
}

/// Mean and (n - 1) variance, exact for constant samples
pub fn mean_and_variance(values: &[f64]) -> (f64, f64) {
    if is_constant(values) {
        let variance = if values.len() < 2 { f64::NAN } else { 0.0 };
        return (values[0], variance);
    }
    (mean(values), sample_variance(values))
}

/// Require at least two finite observations
pub fn check_sample(values: &[f64], context: &str) -> Result<()> {
    if values.len() < 2 {
        return Err(Error::insufficient(values.len()));
    }
    if values.iter().any(|v| !v.is_finite()) {
        return Err(Error::non_finite(context));
    }
    Ok(())
}
