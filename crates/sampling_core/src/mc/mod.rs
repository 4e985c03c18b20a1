//! Monte Carlo estimation of the unit-ball volume.
//!
//! Points are drawn uniformly from the cube `[-1, 1]^n`; the fraction that
//! lands inside the unit ball, times the cube volume `2^n`, estimates the
//! ball volume. The estimator is unbiased with a standard error that
//! shrinks like `1 / sqrt(N)`.
//!
//! # Architecture
//!
//! ```text
//! estimate_ball_volume()            one SamplerRng, sequential
//! estimate_ball_volume_parallel()   fixed chunks, one stream per chunk, rayon
//!         └── count_inside()        shared inner loop
//!                 └── VolumeEstimate (volume, std_error, counts)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use sampling_core::mc::estimate_ball_volume;
//! use sampling_core::rng::SamplerRng;
//! use std::f64::consts::PI;
//!
//! let mut rng = SamplerRng::from_seed(42);
//! let estimate = estimate_ball_volume(2, 200_000, &mut rng).unwrap();
//!
//! assert!((estimate.volume - PI).abs() < 4.0 * estimate.std_error + 1e-9);
//! ```

mod parallel;
mod result;
mod volume;

pub use parallel::{
    estimate_ball_volume_chunked, estimate_ball_volume_parallel, DEFAULT_CHUNK_COUNT,
};
pub use result::VolumeEstimate;
pub use volume::{estimate_ball_volume, DEFAULT_VOLUME_SAMPLES, MAX_DIMENSION};
