//! Owned sample sets produced by the sampler.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The ordered output of one sampler invocation.
///
/// Binomial draws are kept as integers; every other family is real-valued.
/// With the `serde` feature a sample serialises as a plain list of numbers.
///
/// # Examples
///
/// ```rust
/// use sampling_core::distributions::SampleSet;
///
/// let sample = SampleSet::Discrete(vec![1, 2, 3]);
/// assert_eq!(sample.len(), 3);
/// assert_eq!(sample.to_f64_vec(), vec![1.0, 2.0, 3.0]);
/// assert_eq!(sample.mean(), Some(2.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum SampleSet {
    /// Integer-valued draws (success counts).
    Discrete(Vec<u64>),
    /// Real-valued draws.
    Continuous(Vec<f64>),
}

impl SampleSet {
    /// Returns the number of draws.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Self::Discrete(values) => values.len(),
            Self::Continuous(values) => values.len(),
        }
    }

    /// Returns true if the sample holds no draws.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true for integer-valued samples.
    #[inline]
    pub fn is_discrete(&self) -> bool {
        matches!(self, Self::Discrete(_))
    }

    /// Copies the draws out as real numbers.
    pub fn to_f64_vec(&self) -> Vec<f64> {
        match self {
            Self::Discrete(values) => values.iter().map(|&v| v as f64).collect(),
            Self::Continuous(values) => values.clone(),
        }
    }

    /// Iterates over the draws as real numbers.
    pub fn iter_f64(&self) -> SampleIter<'_> {
        match self {
            Self::Discrete(values) => SampleIter::Discrete(values.iter()),
            Self::Continuous(values) => SampleIter::Continuous(values.iter()),
        }
    }

    /// Arithmetic mean, or `None` for an empty sample.
    pub fn mean(&self) -> Option<f64> {
        if self.is_empty() {
            return None;
        }
        Some(self.iter_f64().sum::<f64>() / self.len() as f64)
    }

    /// Sample standard deviation (Bessel-corrected), or `None` with fewer
    /// than two draws.
    pub fn std_dev(&self) -> Option<f64> {
        let n = self.len();
        if n < 2 {
            return None;
        }
        let mean = self.mean()?;
        let sum_sq: f64 = self.iter_f64().map(|v| (v - mean).powi(2)).sum();
        Some((sum_sq / (n - 1) as f64).sqrt())
    }

    /// Smallest draw, or `None` for an empty sample.
    pub fn min(&self) -> Option<f64> {
        self.iter_f64().reduce(f64::min)
    }

    /// Largest draw, or `None` for an empty sample.
    pub fn max(&self) -> Option<f64> {
        self.iter_f64().reduce(f64::max)
    }
}

/// Iterator over a [`SampleSet`] yielding every draw as `f64`.
///
/// Returned by [`SampleSet::iter_f64`].
#[derive(Clone, Debug)]
pub enum SampleIter<'a> {
    /// Over integer draws, widened on the fly.
    Discrete(std::slice::Iter<'a, u64>),
    /// Over real draws.
    Continuous(std::slice::Iter<'a, f64>),
}

impl Iterator for SampleIter<'_> {
    type Item = f64;

    #[inline]
    fn next(&mut self) -> Option<f64> {
        match self {
            Self::Discrete(iter) => iter.next().map(|&v| v as f64),
            Self::Continuous(iter) => iter.next().copied(),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Discrete(iter) => iter.size_hint(),
            Self::Continuous(iter) => iter.size_hint(),
        }
    }
}

impl ExactSizeIterator for SampleIter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_iter_f64_widens_and_reports_length() {
        let discrete = SampleSet::Discrete(vec![4, 0, 9]);
        let iter = discrete.iter_f64();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.collect::<Vec<_>>(), vec![4.0, 0.0, 9.0]);

        let continuous = SampleSet::Continuous(vec![-0.5, 2.25]);
        let mut iter = continuous.iter_f64();
        assert_eq!(iter.next(), Some(-0.5));
        assert_eq!(iter.len(), 1);
        assert_eq!(iter.next(), Some(2.25));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_empty_sample() {
        let sample = SampleSet::Continuous(vec![]);
        assert!(sample.is_empty());
        assert_eq!(sample.mean(), None);
        assert_eq!(sample.std_dev(), None);
        assert_eq!(sample.min(), None);
        assert_eq!(sample.max(), None);
    }

    #[test]
    fn test_statistics() {
        let sample = SampleSet::Continuous(vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert_relative_eq!(sample.mean().unwrap(), 5.0);
        assert_relative_eq!(sample.std_dev().unwrap(), (32.0_f64 / 7.0).sqrt(), epsilon = 1e-12);
        assert_eq!(sample.min(), Some(2.0));
        assert_eq!(sample.max(), Some(9.0));
    }

    #[test]
    fn test_single_draw_has_no_std_dev() {
        let sample = SampleSet::Discrete(vec![4]);
        assert_eq!(sample.mean(), Some(4.0));
        assert_eq!(sample.std_dev(), None);
    }

    #[test]
    fn test_discrete_flag() {
        assert!(SampleSet::Discrete(vec![1]).is_discrete());
        assert!(!SampleSet::Continuous(vec![1.0]).is_discrete());
    }
}
