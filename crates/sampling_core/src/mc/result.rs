//! Result type for volume estimates.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of a Monte Carlo volume estimate.
///
/// # Examples
///
/// ```rust
/// use sampling_core::mc::VolumeEstimate;
///
/// let estimate = VolumeEstimate::from_counts(2, 1000, 785);
/// assert_eq!(estimate.volume, 3.14);
/// println!("Volume: {} +/- {}", estimate.volume, estimate.confidence_95());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VolumeEstimate {
    /// Estimated volume of the unit ball.
    pub volume: f64,
    /// Standard error of the estimate.
    pub std_error: f64,
    /// Dimension of the ball.
    pub dimension: usize,
    /// Number of points drawn.
    pub sample_count: usize,
    /// Number of points that landed inside the ball.
    pub inside: usize,
}

impl VolumeEstimate {
    /// Builds an estimate from raw hit counts.
    ///
    /// The standard error is the binomial one, `2^n · sqrt(p̂(1 − p̂) / N)`.
    pub fn from_counts(dimension: usize, sample_count: usize, inside: usize) -> Self {
        if inside == 0 || sample_count == 0 {
            return Self {
                volume: 0.0,
                std_error: 0.0,
                dimension,
                sample_count,
                inside,
            };
        }

        let cube = cube_volume(dimension);
        let n = sample_count as f64;
        let p = inside as f64 / n;

        Self {
            volume: cube * inside as f64 / n,
            std_error: cube * (p * (1.0 - p) / n).sqrt(),
            dimension,
            sample_count,
            inside,
        }
    }

    /// Fraction of points that landed inside the ball.
    #[inline]
    pub fn hit_ratio(&self) -> f64 {
        if self.sample_count == 0 {
            return 0.0;
        }
        self.inside as f64 / self.sample_count as f64
    }

    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }

    /// Returns the 99% confidence interval half-width.
    #[inline]
    pub fn confidence_99(&self) -> f64 {
        2.576 * self.std_error
    }
}

/// Volume of the sampling cube `[-1, 1]^n`.
#[inline]
pub(crate) fn cube_volume(dimension: usize) -> f64 {
    2.0_f64.powi(dimension as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_counts() {
        let estimate = VolumeEstimate::from_counts(3, 1000, 500);
        assert_relative_eq!(estimate.volume, 4.0);
        assert_relative_eq!(estimate.std_error, 8.0 * (0.25_f64 / 1000.0).sqrt());
        assert_relative_eq!(estimate.hit_ratio(), 0.5);
    }

    #[test]
    fn test_all_inside_has_zero_error() {
        let estimate = VolumeEstimate::from_counts(1, 100, 100);
        assert_eq!(estimate.volume, 2.0);
        assert_eq!(estimate.std_error, 0.0);
    }

    #[test]
    fn test_no_hits() {
        let estimate = VolumeEstimate::from_counts(40, 100, 0);
        assert_eq!(estimate.volume, 0.0);
        assert_eq!(estimate.std_error, 0.0);
        assert_eq!(estimate.hit_ratio(), 0.0);
    }

    #[test]
    fn test_confidence_intervals() {
        let estimate = VolumeEstimate {
            volume: 3.0,
            std_error: 0.1,
            dimension: 2,
            sample_count: 10,
            inside: 7,
        };
        assert_relative_eq!(estimate.confidence_95(), 0.196);
        assert_relative_eq!(estimate.confidence_99(), 0.2576);
    }

    #[test]
    fn test_cube_volume() {
        assert_eq!(cube_volume(0), 1.0);
        assert_eq!(cube_volume(10), 1024.0);
    }
}
