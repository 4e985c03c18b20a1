//! Sequential ball-volume estimator.

use super::result::VolumeEstimate;
use crate::error::{Result, SamplingError};
use crate::rng::SamplerRng;

/// Number of points drawn when the caller does not choose one.
pub const DEFAULT_VOLUME_SAMPLES: usize = 100_000;

/// Largest dimension whose cube volume `2^n` is representable as `f64`.
pub const MAX_DIMENSION: usize = 1023;

/// Estimates the volume of the unit ball in `dimension` dimensions.
///
/// Draws `sample_count` points independently and uniformly from
/// `[-1, 1]^dimension`, counts those with Euclidean norm ≤ 1 and scales the
/// hit fraction by `2^dimension`. The result is stochastic by design; there
/// is no closed-form fallback.
///
/// # Errors
///
/// `InvalidParameters` if `dimension` is zero or above [`MAX_DIMENSION`],
/// or if `sample_count` is zero.
pub fn estimate_ball_volume(
    dimension: usize,
    sample_count: usize,
    rng: &mut SamplerRng,
) -> Result<VolumeEstimate> {
    validate(dimension, sample_count)?;
    let inside = count_inside(dimension, sample_count, rng);
    Ok(VolumeEstimate::from_counts(dimension, sample_count, inside))
}

pub(crate) fn validate(dimension: usize, sample_count: usize) -> Result<()> {
    if dimension == 0 || dimension > MAX_DIMENSION {
        return Err(SamplingError::invalid_parameter(
            "dimension",
            format!("must be in [1, {}], got {}", MAX_DIMENSION, dimension),
        ));
    }
    if sample_count == 0 {
        return Err(SamplingError::invalid_parameter(
            "sample_count",
            "must be at least 1",
        ));
    }
    Ok(())
}

/// Draws `sample_count` points in the cube and returns how many fall in the ball.
pub(crate) fn count_inside(dimension: usize, sample_count: usize, rng: &mut SamplerRng) -> usize {
    // Hoisted point buffer, refilled per draw.
    let mut point = vec![0.0; dimension];
    let mut inside = 0;

    for _ in 0..sample_count {
        rng.fill_uniform(&mut point);
        let norm_sq: f64 = point
            .iter()
            .map(|&u| {
                let x = 2.0 * u - 1.0;
                x * x
            })
            .sum();
        if norm_sq <= 1.0 {
            inside += 1;
        }
    }
    inside
}
