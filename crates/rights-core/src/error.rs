//! Error types for the rights/democracy pipeline
//!
//! Provides a unified error type shared by every pipeline crate.

use thiserror::Error;

/// Core error type for join, aggregation and testing operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Expected indicator column absent from the input schema
    #[error("Missing column: {0}")]
    MissingColumn(String),

    /// Both sources were non-empty but no row survived the join
    #[error("Join key mismatch: none of {rights} territories matched any of {democracy} countries")]
    JoinKeyMismatch { rights: usize, democracy: usize },

    /// A statistical operation received too few usable observations
    #[error("Insufficient sample: expected at least {expected} observations, got {actual}")]
    InsufficientSample { expected: usize, actual: usize },

    /// The t-statistic is 0/0: both samples are constant and share a mean
    #[error("Degenerate variance: both samples have zero variance and equal means")]
    DegenerateVariance,

    /// Two rows share a key after normalisation
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for a sample below the two-observation minimum
    pub fn insufficient(actual: usize) -> Self {
        Self::InsufficientSample {
            expected: 2,
            actual,
        }
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidInput(format!("{context} contains NaN or infinite values"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::MissingColumn("Same-sex marriage".to_string());
        assert_eq!(err.to_string(), "Missing column: Same-sex marriage");

        let err = Error::JoinKeyMismatch { rights: 3, democracy: 4 };
        assert_eq!(
            err.to_string(),
            "Join key mismatch: none of 3 territories matched any of 4 countries"
        );

        let err = Error::InsufficientSample { expected: 2, actual: 1 };
        assert_eq!(
            err.to_string(),
            "Insufficient sample: expected at least 2 observations, got 1"
        );

        let err = Error::DuplicateKey("utopia".to_string());
        assert_eq!(err.to_string(), "Duplicate key: utopia");
    }

    #[test]
    fn test_error_helper_functions() {
        match Error::insufficient(1) {
            Error::InsufficientSample { expected, actual } => {
                assert_eq!(expected, 2);
                assert_eq!(actual, 1);
            }
            other => panic!("Wrong error type: {other:?}"),
        }

        let err = Error::non_finite("sample A");
        assert_eq!(
            err.to_string(),
            "Invalid input: sample A contains NaN or infinite values"
        );
    }
}
