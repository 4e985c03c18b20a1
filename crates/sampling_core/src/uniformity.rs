//! Uniformity testing by histogram occupancy variance.
//!
//! The sample is rescaled to [0, 1] with its observed minimum and maximum,
//! partitioned into equal-width bins, and scored by the population variance
//! of the bin counts. An evenly spread sample scores 0; clustering raises
//! the score.
//!
//! The rescale uses the observed range rather than the support of the law
//! the sample was drawn from, so for unbounded laws the score describes the
//! sample's own spread.
//!
//! # Examples
//!
//! ```rust
//! use sampling_core::uniformity::{uniformity_score, DEFAULT_BIN_COUNT};
//!
//! let even: Vec<f64> = (0..100).map(|i| i as f64).collect();
//! assert_eq!(uniformity_score(&even, DEFAULT_BIN_COUNT).unwrap(), 0.0);
//!
//! let flat = vec![2.5; 100];
//! assert_eq!(uniformity_score(&flat, 10).unwrap(), 900.0);
//! ```

use crate::analytical::max_uniformity_score;
use crate::error::{Result, SamplingError};

/// Number of bins used when the caller does not choose one.
pub const DEFAULT_BIN_COUNT: usize = 10;

/// Linearly rescales the sample onto [0, 1] using its observed range.
///
/// # Errors
///
/// - `InsufficientSamples` for an empty sample
/// - `InvalidParameters` if any value is not finite
/// - `DegenerateRange` if every value is identical
pub fn normalise(sample: &[f64]) -> Result<Vec<f64>> {
    if sample.is_empty() {
        return Err(SamplingError::InsufficientSamples {
            required: 1,
            actual: 0,
        });
    }
    if let Some(bad) = sample.iter().find(|v| !v.is_finite()) {
        return Err(SamplingError::invalid_parameter(
            "sample",
            format!("values must be finite, found {}", bad),
        ));
    }

    let min = sample.iter().copied().fold(f64::INFINITY, f64::min);
    let max = sample.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;
    if range == 0.0 {
        return Err(SamplingError::DegenerateRange { value: min });
    }

    if range.is_finite() {
        return Ok(sample.iter().map(|&v| (v - min) / range).collect());
    }

    // Spread exceeds f64::MAX; halving is exact for values this large.
    let half_range = max / 2.0 - min / 2.0;
    Ok(sample
        .iter()
        .map(|&v| ((v / 2.0 - min / 2.0) / half_range).clamp(0.0, 1.0))
        .collect())
}

/// Counts how many values fall in each of `bin_count` equal-width bins over [0, 1].
///
/// Bin `k` covers `[k / bin_count, (k + 1) / bin_count)`; the value 1.0 is
/// counted in the last bin. Values outside [0, 1] are ignored.
///
/// # Errors
///
/// `InvalidParameters` if `bin_count` is zero.
pub fn bin_counts(normalised: &[f64], bin_count: usize) -> Result<Vec<usize>> {
    if bin_count == 0 {
        return Err(SamplingError::invalid_parameter(
            "bin_count",
            "must be at least 1",
        ));
    }

    let mut counts = vec![0usize; bin_count];
    for &value in normalised {
        if !(0.0..=1.0).contains(&value) {
            continue;
        }
        let index = ((value * bin_count as f64) as usize).min(bin_count - 1);
        counts[index] += 1;
    }
    Ok(counts)
}

/// Population variance of a set of bin counts.
pub fn occupancy_variance(counts: &[usize]) -> f64 {
    if counts.is_empty() {
        return 0.0;
    }
    let n = counts.len() as f64;
    let mean = counts.iter().map(|&c| c as f64).sum::<f64>() / n;
    counts
        .iter()
        .map(|&c| (c as f64 - mean).powi(2))
        .sum::<f64>()
        / n
}

/// Scores how evenly the sample covers its observed range.
///
/// Returns the population variance of the bin counts of the min-max
/// normalised sample. The result is never negative and is 0 for a sample
/// spread exactly evenly across the bins.
///
/// A sample whose values are all identical has no range to rescale. It is
/// reported with the maximal score [`max_uniformity_score`], the variance
/// obtained when every value lands in a single bin.
///
/// # Errors
///
/// - `InsufficientSamples` for an empty sample
/// - `InvalidParameters` if `bin_count` is zero or a value is not finite
pub fn uniformity_score(sample: &[f64], bin_count: usize) -> Result<f64> {
    if bin_count == 0 {
        return Err(SamplingError::invalid_parameter(
            "bin_count",
            "must be at least 1",
        ));
    }

    match normalise(sample) {
        Ok(normalised) => Ok(occupancy_variance(&bin_counts(&normalised, bin_count)?)),
        Err(SamplingError::DegenerateRange { .. }) => {
            Ok(max_uniformity_score(sample.len(), bin_count))
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_normalise_endpoints() {
        let normalised = normalise(&[5.0, 10.0, 7.5]).unwrap();
        assert_eq!(normalised, vec![0.0, 1.0, 0.5]);
    }

    #[test]
    fn test_normalise_errors() {
        assert!(matches!(
            normalise(&[]),
            Err(SamplingError::InsufficientSamples { required: 1, actual: 0 })
        ));
        assert!(matches!(
            normalise(&[3.0, 3.0]),
            Err(SamplingError::DegenerateRange { value }) if value == 3.0
        ));
        assert!(matches!(
            normalise(&[1.0, f64::NAN]),
            Err(SamplingError::InvalidParameters { name: "sample", .. })
        ));
    }

    #[test]
    fn test_normalise_spread_beyond_f64_max() {
        let normalised = normalise(&[-1e308, 0.0, 1e308, 5e307]).unwrap();
        assert_eq!(normalised[0], 0.0);
        assert_eq!(normalised[2], 1.0);
        assert_eq!(normalised[1], 0.5);
        assert_relative_eq!(normalised[3], 0.75, epsilon = 1e-12);
    }

    #[test]
    fn test_extreme_spread_scores_every_value() {
        let sample = [-1e308, 0.0, 1e308, 5e307];
        let counts = bin_counts(&normalise(&sample).unwrap(), 3).unwrap();
        assert_eq!(counts, vec![1, 1, 2]);
        assert_relative_eq!(uniformity_score(&sample, 3).unwrap(), 2.0 / 9.0);
    }

    #[test]
    fn test_bin_counts_places_maximum_in_last_bin() {
        let counts = bin_counts(&[0.0, 0.25, 0.5, 0.99, 1.0], 4).unwrap();
        assert_eq!(counts, vec![1, 1, 1, 2]);
    }

    #[test]
    fn test_bin_counts_ignores_out_of_range() {
        let counts = bin_counts(&[-0.1, 0.5, 1.1], 2).unwrap();
        assert_eq!(counts, vec![0, 1]);
    }

    #[test]
    fn test_bin_counts_zero_bins() {
        assert!(bin_counts(&[0.5], 0).is_err());
    }

    #[test]
    fn test_occupancy_variance() {
        assert_eq!(occupancy_variance(&[]), 0.0);
        assert_eq!(occupancy_variance(&[3, 3, 3]), 0.0);
        assert_relative_eq!(occupancy_variance(&[0, 2]), 1.0);
        assert_relative_eq!(occupancy_variance(&[1, 2, 3, 4]), 1.25);
    }

    #[test]
    fn test_even_split_scores_zero() {
        let sample: Vec<f64> = (0..100).map(|i| i as f64).collect();
        assert_eq!(uniformity_score(&sample, 10).unwrap(), 0.0);
    }

    #[test]
    fn test_clustered_sample_scores_higher() {
        let even: Vec<f64> = (0..100).map(|i| i as f64).collect();
        let mut clustered = vec![0.0; 90];
        clustered.extend((0..10).map(|i| 90.0 + i as f64));

        let even_score = uniformity_score(&even, 10).unwrap();
        let clustered_score = uniformity_score(&clustered, 10).unwrap();
        assert!(clustered_score > even_score);
    }

    #[test]
    fn test_degenerate_sample_reports_maximum() {
        let score = uniformity_score(&[4.2; 50], 10).unwrap();
        assert_relative_eq!(score, max_uniformity_score(50, 10));
        assert_relative_eq!(score, 2500.0 * 9.0 / 100.0);
    }

    #[test]
    fn test_single_value_is_degenerate() {
        assert_relative_eq!(uniformity_score(&[1.0], 10).unwrap(), 0.09);
    }

    #[test]
    fn test_score_errors() {
        assert!(matches!(
            uniformity_score(&[], 10),
            Err(SamplingError::InsufficientSamples { .. })
        ));
        assert!(matches!(
            uniformity_score(&[1.0, 2.0], 0),
            Err(SamplingError::InvalidParameters { name: "bin_count", .. })
        ));
    }
}
