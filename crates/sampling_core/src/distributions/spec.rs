//! Distribution specifications.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, SamplingError};

/// Largest trial count accepted when converting from a floating-point
/// parameter; beyond 2^53 an `f64` no longer represents every integer.
const MAX_EXACT_TRIALS: f64 = 9_007_199_254_740_992.0;

/// The closed set of supported distribution families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DistributionKind {
    /// Gaussian law, parameterised by mean and standard deviation.
    Normal,
    /// Continuous uniform law on [low, high).
    Uniform,
    /// Number of successes in a fixed number of Bernoulli trials.
    Binomial,
}

impl DistributionKind {
    /// All supported families.
    pub const ALL: [DistributionKind; 3] = [Self::Normal, Self::Uniform, Self::Binomial];

    /// Returns the canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Uniform => "uniform",
            Self::Binomial => "binomial",
        }
    }

    /// Returns the names of the two parameters, in order.
    pub fn parameter_names(&self) -> [&'static str; 2] {
        match self {
            Self::Normal => ["mean", "std_dev"],
            Self::Uniform => ["low", "high"],
            Self::Binomial => ["trials", "probability"],
        }
    }
}

impl fmt::Display for DistributionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DistributionKind {
    type Err = SamplingError;

    /// Parses a family name, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "normal" | "gaussian" => Ok(Self::Normal),
            "uniform" => Ok(Self::Uniform),
            "binomial" => Ok(Self::Binomial),
            _ => Err(SamplingError::InvalidDistribution(s.to_string())),
        }
    }
}

/// A distribution family together with its parameters.
///
/// Use the validating constructors ([`normal`](Self::normal),
/// [`uniform`](Self::uniform), [`binomial`](Self::binomial)) or
/// [`from_parts`](Self::from_parts) for untyped input. Variants built
/// directly are re-checked by [`validate`](Self::validate) before sampling.
///
/// # Examples
///
/// ```rust
/// use sampling_core::distributions::{DistributionKind, DistributionSpec};
///
/// let spec = DistributionSpec::from_parts("Binomial", &[10.0, 0.3]).unwrap();
/// assert_eq!(spec.kind(), DistributionKind::Binomial);
///
/// assert!(DistributionSpec::normal(0.0, 0.0).is_err());
/// assert!(DistributionSpec::from_parts("cauchy", &[0.0, 1.0]).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum DistributionSpec {
    /// Normal(mean, std_dev), std_dev > 0.
    Normal {
        /// Mean of the law.
        mean: f64,
        /// Standard deviation, strictly positive.
        std_dev: f64,
    },
    /// Uniform(low, high), low < high.
    Uniform {
        /// Inclusive lower bound.
        low: f64,
        /// Exclusive upper bound.
        high: f64,
    },
    /// Binomial(trials, probability), probability in [0, 1].
    Binomial {
        /// Number of Bernoulli trials per draw.
        trials: u64,
        /// Success probability of each trial.
        probability: f64,
    },
}

impl DistributionSpec {
    /// Creates a validated Normal specification.
    ///
    /// # Errors
    ///
    /// `InvalidParameters` if `mean` is not finite or `std_dev` is not a
    /// finite positive number.
    pub fn normal(mean: f64, std_dev: f64) -> Result<Self> {
        let spec = Self::Normal { mean, std_dev };
        spec.validate()?;
        Ok(spec)
    }

    /// Creates a validated Uniform specification.
    ///
    /// # Errors
    ///
    /// `InvalidParameters` unless both bounds are finite, `low < high`, and
    /// the width `high - low` is representable.
    pub fn uniform(low: f64, high: f64) -> Result<Self> {
        let spec = Self::Uniform { low, high };
        spec.validate()?;
        Ok(spec)
    }

    /// Creates a validated Binomial specification.
    ///
    /// # Errors
    ///
    /// `InvalidParameters` unless `probability` lies in [0, 1].
    pub fn binomial(trials: u64, probability: f64) -> Result<Self> {
        let spec = Self::Binomial {
            trials,
            probability,
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Builds a specification from a family tag and an untyped parameter list.
    ///
    /// This is the entry point for presentation layers that collect a tag
    /// and numbers from a user. The binomial trial count must be a
    /// non-negative whole number.
    ///
    /// # Errors
    ///
    /// - `InvalidDistribution` if the tag is not recognised
    /// - `InvalidParameters` if there are not exactly two parameters or a
    ///   parameter is outside its domain
    pub fn from_parts(tag: &str, params: &[f64]) -> Result<Self> {
        let kind: DistributionKind = tag.parse()?;
        let [first, second] = match params {
            [a, b] => [*a, *b],
            _ => {
                return Err(SamplingError::invalid_parameter(
                    "params",
                    format!(
                        "{} takes exactly 2 parameters ({}, {}), got {}",
                        kind,
                        kind.parameter_names()[0],
                        kind.parameter_names()[1],
                        params.len()
                    ),
                ))
            }
        };

        match kind {
            DistributionKind::Normal => Self::normal(first, second),
            DistributionKind::Uniform => Self::uniform(first, second),
            DistributionKind::Binomial => {
                if !first.is_finite() || first < 0.0 || first.fract() != 0.0 {
                    return Err(SamplingError::invalid_parameter(
                        "trials",
                        format!("must be a non-negative integer, got {}", first),
                    ));
                }
                if first > MAX_EXACT_TRIALS {
                    return Err(SamplingError::invalid_parameter(
                        "trials",
                        format!("must not exceed 2^53, got {}", first),
                    ));
                }
                Self::binomial(first as u64, second)
            }
        }
    }

    /// Returns the distribution family.
    pub fn kind(&self) -> DistributionKind {
        match self {
            Self::Normal { .. } => DistributionKind::Normal,
            Self::Uniform { .. } => DistributionKind::Uniform,
            Self::Binomial { .. } => DistributionKind::Binomial,
        }
    }

    /// Checks the parameter domain for the family.
    ///
    /// # Errors
    ///
    /// `InvalidParameters` naming the first offending parameter.
    pub fn validate(&self) -> Result<()> {
        match *self {
            Self::Normal { mean, std_dev } => {
                if !mean.is_finite() {
                    return Err(SamplingError::invalid_parameter(
                        "mean",
                        format!("must be finite, got {}", mean),
                    ));
                }
                if !(std_dev.is_finite() && std_dev > 0.0) {
                    return Err(SamplingError::invalid_parameter(
                        "std_dev",
                        format!("must be a finite positive number, got {}", std_dev),
                    ));
                }
            }
            Self::Uniform { low, high } => {
                if !low.is_finite() || !high.is_finite() {
                    return Err(SamplingError::invalid_parameter(
                        "low/high",
                        format!("bounds must be finite, got [{}, {})", low, high),
                    ));
                }
                if low >= high {
                    return Err(SamplingError::invalid_parameter(
                        "low/high",
                        format!("low must be below high, got [{}, {})", low, high),
                    ));
                }
                if !(high - low).is_finite() {
                    return Err(SamplingError::invalid_parameter(
                        "low/high",
                        format!("range [{}, {}) overflows", low, high),
                    ));
                }
            }
            Self::Binomial { probability, .. } => {
                if !(0.0..=1.0).contains(&probability) {
                    return Err(SamplingError::invalid_parameter(
                        "probability",
                        format!("must lie in [0, 1], got {}", probability),
                    ));
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for DistributionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal { mean, std_dev } => write!(f, "Normal({}, {})", mean, std_dev),
            Self::Uniform { low, high } => write!(f, "Uniform({}, {})", low, high),
            Self::Binomial {
                trials,
                probability,
            } => write!(f, "Binomial({}, {})", trials, probability),
        }
    }
}
