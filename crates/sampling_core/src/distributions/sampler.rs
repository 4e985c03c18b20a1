//! Drawing samples from a [`DistributionSpec`].

use rand_distr::{Binomial, Normal, Uniform};

use super::{DistributionSpec, SampleSet};
use crate::error::{Result, SamplingError};
use crate::rng::SamplerRng;

/// Sample size used when the caller does not choose one.
pub const DEFAULT_SAMPLE_SIZE: usize = 1000;

/// Draws `size` independent values from the specified distribution.
///
/// - `Normal` and `Uniform` produce [`SampleSet::Continuous`]
/// - `Binomial` produces [`SampleSet::Discrete`] with every value in
///   `[0, trials]`
///
/// The only side effect is consuming entropy from `rng`.
///
/// # Errors
///
/// `InvalidParameters` if `size` is zero or the specification violates its
/// parameter domain.
///
/// # Examples
///
/// ```rust
/// use sampling_core::distributions::{sample, DistributionSpec, SampleSet};
/// use sampling_core::rng::SamplerRng;
///
/// let mut rng = SamplerRng::from_seed(7);
/// let spec = DistributionSpec::binomial(10, 0.5).unwrap();
///
/// match sample(&spec, 100, &mut rng).unwrap() {
///     SampleSet::Discrete(counts) => assert!(counts.iter().all(|&k| k <= 10)),
///     SampleSet::Continuous(_) => unreachable!(),
/// }
/// ```
pub fn sample(spec: &DistributionSpec, size: usize, rng: &mut SamplerRng) -> Result<SampleSet> {
    if size == 0 {
        return Err(SamplingError::invalid_parameter("size", "must be at least 1"));
    }
    spec.validate()?;

    let set = match *spec {
        DistributionSpec::Normal { mean, std_dev } => {
            let law = Normal::new(mean, std_dev)
                .map_err(|e| SamplingError::invalid_parameter("std_dev", e.to_string()))?;
            SampleSet::Continuous((0..size).map(|_| rng.sample(&law)).collect())
        }
        DistributionSpec::Uniform { low, high } => {
            let law = Uniform::new(low, high);
            SampleSet::Continuous((0..size).map(|_| rng.sample(&law)).collect())
        }
        DistributionSpec::Binomial {
            trials,
            probability,
        } => {
            let law = Binomial::new(trials, probability)
                .map_err(|e| SamplingError::invalid_parameter("probability", e.to_string()))?;
            SampleSet::Discrete((0..size).map(|_| rng.sample(&law)).collect())
        }
    };

    Ok(set)
}

/// Builds a specification from a tag and untyped parameters, then samples it.
///
/// # Errors
///
/// `InvalidDistribution` for an unknown tag, otherwise as [`sample`] and
/// [`DistributionSpec::from_parts`].
pub fn sample_tagged(
    tag: &str,
    params: &[f64],
    size: usize,
    rng: &mut SamplerRng,
) -> Result<SampleSet> {
    let spec = DistributionSpec::from_parts(tag, params)?;
    sample(&spec, size, rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_length() {
        let mut rng = SamplerRng::from_seed(1);
        for spec in [
            DistributionSpec::normal(0.0, 1.0).unwrap(),
            DistributionSpec::uniform(0.0, 1.0).unwrap(),
            DistributionSpec::binomial(5, 0.5).unwrap(),
        ] {
            assert_eq!(sample(&spec, 37, &mut rng).unwrap().len(), 37);
        }
    }

    #[test]
    fn test_zero_size_rejected() {
        let mut rng = SamplerRng::from_seed(1);
        let spec = DistributionSpec::normal(0.0, 1.0).unwrap();
        assert!(matches!(
            sample(&spec, 0, &mut rng),
            Err(SamplingError::InvalidParameters { name: "size", .. })
        ));
    }

    #[test]
    fn test_unvalidated_spec_rejected() {
        let mut rng = SamplerRng::from_seed(1);
        let spec = DistributionSpec::Uniform {
            low: 3.0,
            high: 1.0,
        };
        assert!(matches!(
            sample(&spec, 10, &mut rng),
            Err(SamplingError::InvalidParameters { .. })
        ));
    }

    #[test]
    fn test_binomial_is_discrete() {
        let mut rng = SamplerRng::from_seed(1);
        let spec = DistributionSpec::binomial(4, 0.3).unwrap();
        let set = sample(&spec, 200, &mut rng).unwrap();
        assert!(set.is_discrete());
        assert!(set.to_f64_vec().iter().all(|&v| (0.0..=4.0).contains(&v)));
    }

    #[test]
    fn test_binomial_degenerate_probabilities() {
        let mut rng = SamplerRng::from_seed(1);
        let never = sample(&DistributionSpec::binomial(8, 0.0).unwrap(), 50, &mut rng).unwrap();
        assert_eq!(never, SampleSet::Discrete(vec![0; 50]));

        let always = sample(&DistributionSpec::binomial(8, 1.0).unwrap(), 50, &mut rng).unwrap();
        assert_eq!(always, SampleSet::Discrete(vec![8; 50]));
    }

    #[test]
    fn test_sample_tagged() {
        let mut rng = SamplerRng::from_seed(1);
        let set = sample_tagged("uniform", &[10.0, 20.0], 100, &mut rng).unwrap();
        assert!(set.to_f64_vec().iter().all(|&v| (10.0..20.0).contains(&v)));

        assert!(matches!(
            sample_tagged("beta", &[1.0, 1.0], 100, &mut rng),
            Err(SamplingError::InvalidDistribution(_))
        ));
    }

    #[test]
    fn test_same_seed_same_sample() {
        let spec = DistributionSpec::normal(3.0, 0.5).unwrap();
        let a = sample(&spec, 64, &mut SamplerRng::from_seed(99)).unwrap();
        let b = sample(&spec, 64, &mut SamplerRng::from_seed(99)).unwrap();
        assert_eq!(a, b);
    }
}
