//! Chunked, parallel ball-volume estimator.
//!
//! The points are split into a fixed number of chunks. Chunk `k` is driven
//! by stream `k` of the caller's seed, so the result depends only on the
//! inputs and never on how many threads the `rayon` pool happens to have.

use rayon::prelude::*;

use super::result::VolumeEstimate;
use super::volume::{count_inside, validate};
use crate::error::{Result, SamplingError};
use crate::rng::SamplerRng;

/// Number of chunks used by [`estimate_ball_volume_parallel`].
pub const DEFAULT_CHUNK_COUNT: usize = 64;

/// Estimates the unit-ball volume across the `rayon` pool.
///
/// Equivalent to [`estimate_ball_volume_chunked`] with
/// [`DEFAULT_CHUNK_COUNT`] chunks.
///
/// # Errors
///
/// `InvalidParameters` under the same conditions as
/// [`estimate_ball_volume`](super::estimate_ball_volume).
///
/// # Examples
///
/// ```rust
/// use sampling_core::mc::estimate_ball_volume_parallel;
///
/// let a = estimate_ball_volume_parallel(3, 50_000, 7).unwrap();
/// let b = estimate_ball_volume_parallel(3, 50_000, 7).unwrap();
/// assert_eq!(a, b);
/// ```
pub fn estimate_ball_volume_parallel(
    dimension: usize,
    sample_count: usize,
    seed: u64,
) -> Result<VolumeEstimate> {
    estimate_ball_volume_chunked(dimension, sample_count, seed, DEFAULT_CHUNK_COUNT)
}

/// Estimates the unit-ball volume using `chunk_count` independent streams.
///
/// When `sample_count < chunk_count` only `sample_count` chunks are used.
///
/// # Errors
///
/// `InvalidParameters` if `chunk_count` is zero, or under the same
/// conditions as [`estimate_ball_volume`](super::estimate_ball_volume).
pub fn estimate_ball_volume_chunked(
    dimension: usize,
    sample_count: usize,
    seed: u64,
    chunk_count: usize,
) -> Result<VolumeEstimate> {
    validate(dimension, sample_count)?;
    if chunk_count == 0 {
        return Err(SamplingError::invalid_parameter(
            "chunk_count",
            "must be at least 1",
        ));
    }

    let inside: usize = chunk_sizes(sample_count, chunk_count)
        .into_par_iter()
        .enumerate()
        .map(|(stream, size)| {
            let mut rng = SamplerRng::from_stream(seed, stream as u64);
            count_inside(dimension, size, &mut rng)
        })
        .sum();

    Ok(VolumeEstimate::from_counts(dimension, sample_count, inside))
}

/// Splits `total` into at most `chunk_count` non-empty, near-equal parts.
fn chunk_sizes(total: usize, chunk_count: usize) -> Vec<usize> {
    let chunks = chunk_count.min(total);
    if chunks == 0 {
        return Vec::new();
    }
    let base = total / chunks;
    let remainder = total % chunks;
    (0..chunks)
        .map(|k| if k < remainder { base + 1 } else { base })
        .collect()
}
