//! Welch's unequal-variance two-sample t-test

use rights_core::descriptive::{check_sample, mean_and_variance};
use rights_core::{Error, Result};
use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, StudentsT};
use tracing::debug;

/// p-values strictly below this are reported as significant
pub const SIGNIFICANCE_LEVEL: f64 = 0.05;

/// Outcome of a two-tailed Welch t-test
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TTestResult {
    /// Signed statistic; positive when sample A has the larger mean
    pub statistic: f64,
    /// Two-tailed p-value in [0, 1]
    pub p_value: f64,
    /// Welch–Satterthwaite degrees of freedom
    pub degrees_of_freedom: f64,
}

impl TTestResult {
    pub fn is_significant(&self) -> bool {
        self.p_value < SIGNIFICANCE_LEVEL
    }
}

/// Two-sample t-test without assuming equal variances.
///
/// Both samples need at least two finite values. Two constant samples with
/// the same mean make the statistic 0/0 and fail with `DegenerateVariance`;
/// constant samples with different means give an infinite statistic and a
/// p-value of zero.
pub fn welch_t_test(sample_a: &[f64], sample_b: &[f64]) -> Result<TTestResult> {
    check_sample(sample_a, "sample A")?;
    check_sample(sample_b, "sample B")?;

    let n_a = sample_a.len() as f64;
    let n_b = sample_b.len() as f64;

    let (mean_a, var_a) = mean_and_variance(sample_a);
    let (mean_b, var_b) = mean_and_variance(sample_b);

    // Squared standard errors of each mean
    let se2_a = var_a / n_a;
    let se2_b = var_b / n_b;
    let se2 = se2_a + se2_b;
    let diff = mean_a - mean_b;

    if se2 == 0.0 {
        if diff == 0.0 {
            return Err(Error::DegenerateVariance);
        }
        return Ok(TTestResult {
            statistic: f64::INFINITY.copysign(diff),
            p_value: 0.0,
            degrees_of_freedom: n_a + n_b - 2.0,
        });
    }

    let statistic = diff / se2.sqrt();
    let degrees_of_freedom =
        se2 * se2 / (se2_a * se2_a / (n_a - 1.0) + se2_b * se2_b / (n_b - 1.0));

    let t_dist = StudentsT::new(0.0, 1.0, degrees_of_freedom).map_err(|e| {
        Error::Computation(format!("Failed to create t-distribution: {}", e))
    })?;
    let p_value = (2.0 * t_dist.sf(statistic.abs())).clamp(0.0, 1.0);

    debug!(
        "Welch t-test: t={:.4}, df={:.3}, p={:.4}",
        statistic, degrees_of_freedom, p_value
    );

    Ok(TTestResult {
        statistic,
        p_value,
        degrees_of_freedom,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_welch_known_values() {
        let a = [1.0, 2.0, 3.0, 4.0, 5.0];
        let b = [2.0, 4.0, 6.0, 8.0, 10.0];

        // se² = 2.5/5 + 10/5 = 2.5, t = -3 / sqrt(2.5)
        let result = welch_t_test(&a, &b).unwrap();
        assert_abs_diff_eq!(result.statistic, -3.0 / 2.5_f64.sqrt(), epsilon = 1e-12);
        assert_abs_diff_eq!(result.degrees_of_freedom, 6.25 / 1.0625, epsilon = 1e-12);
        assert!(result.p_value > 0.09 && result.p_value < 0.12, "p = {}", result.p_value);
        assert!(!result.is_significant());
    }

    #[test]
    fn test_welch_clear_difference_is_significant() {
        let a = [9.8, 9.5, 9.1, 8.9, 9.3, 9.6];
        let b = [2.1, 3.4, 2.8, 3.9, 2.5, 3.0];
        let result = welch_t_test(&a, &b).unwrap();
        assert!(result.statistic > 0.0);
        assert!(result.is_significant());
    }

    #[test]
    fn test_welch_insufficient_sample() {
        assert_eq!(
            welch_t_test(&[5.0], &[3.0, 4.0]),
            Err(Error::InsufficientSample { expected: 2, actual: 1 })
        );
        assert_eq!(
            welch_t_test(&[3.0, 4.0], &[]),
            Err(Error::InsufficientSample { expected: 2, actual: 0 })
        );
    }

    #[test]
    fn test_welch_degenerate_variance() {
        assert_eq!(
            welch_t_test(&[4.0, 4.0, 4.0], &[4.0, 4.0]),
            Err(Error::DegenerateVariance)
        );
    }

    #[test]
    fn test_welch_constant_samples_with_different_means() {
        let result = welch_t_test(&[2.0, 2.0], &[5.0, 5.0, 5.0]).unwrap();
        assert_eq!(result.statistic, f64::NEG_INFINITY);
        assert_eq!(result.p_value, 0.0);

        let result = welch_t_test(&[0.3; 7], &[0.1; 5]).unwrap();
        assert_eq!(result.statistic, f64::INFINITY);
        assert_eq!(result.p_value, 0.0);
    }

    #[test]
    fn test_welch_inexact_constant_is_degenerate() {
        // 0.1 is not representable, so a streaming variance is not exactly 0
        assert_eq!(welch_t_test(&[0.1; 6], &[0.1; 7]), Err(Error::DegenerateVariance));
        assert_eq!(welch_t_test(&[9.81; 2], &[9.81; 3]), Err(Error::DegenerateVariance));
    }

    #[test]
    fn test_welch_small_p_value_keeps_precision() {
        let a = [10.0, 10.1, 9.9, 10.05, 9.95, 10.02, 9.98, 10.01];
        let b = [0.0, 0.1, -0.1, 0.05, -0.05, 0.02, -0.02, 0.01];
        let result = welch_t_test(&a, &b).unwrap();
        assert!(result.p_value > 0.0, "p underflowed to zero");
        assert!(result.p_value < 1e-15);
    }

    #[test]
    fn test_welch_rejects_non_finite() {
        assert!(matches!(
            welch_t_test(&[1.0, f64::NAN], &[1.0, 2.0]),
            Err(Error::InvalidInput(_))
        ));
    }
}
