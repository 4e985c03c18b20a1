//! Error types for the sampling engine.
//!
//! Every operation in this crate either returns a complete result or one of
//! the [`SamplingError`] kinds below. All of them are deterministic input
//! validation failures; none is transient.

use thiserror::Error;

/// Errors raised by the sampling, testing and estimation operations.
///
/// # Examples
///
/// ```rust
/// use sampling_core::SamplingError;
///
/// let err = SamplingError::InvalidDistribution("poisson".to_string());
/// assert_eq!(err.to_string(), "Invalid distribution 'poisson': expected normal, uniform or binomial");
/// ```
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SamplingError {
    /// The distribution tag is not one of the recognised families.
    #[error("Invalid distribution '{0}': expected normal, uniform or binomial")]
    InvalidDistribution(String),

    /// A parameter is outside its domain, or a precondition on sizes is violated.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameters {
        /// Parameter name.
        name: &'static str,
        /// Description of the violated constraint.
        reason: String,
    },

    /// Too few observations for the statistic to be defined.
    #[error("Insufficient samples: need at least {required}, got {actual}")]
    InsufficientSamples {
        /// Minimum number of observations.
        required: usize,
        /// Number of observations supplied.
        actual: usize,
    },

    /// Every value in the sample is identical, so it has no range to rescale.
    #[error("Degenerate range: every value equals {value}")]
    DegenerateRange {
        /// The single observed value.
        value: f64,
    },
}

impl SamplingError {
    /// Creates a [`SamplingError::InvalidParameters`] error.
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameters {
            name,
            reason: reason.into(),
        }
    }
}

/// Result alias for sampling operations.
pub type Result<T> = std::result::Result<T, SamplingError>;
