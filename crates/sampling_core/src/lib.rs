//! # sampling_core: Sampling and Randomness-Quality Engine
//!
//! ## Role
//!
//! sampling_core is the numeric kernel of the workspace. It provides five
//! independent, stateless operations:
//!
//! - Distribution sampling: Normal, Uniform, Binomial (`distributions`)
//! - Uniformity scoring by histogram occupancy variance (`uniformity`)
//! - Decorrelated vector generation via QR orthogonalisation (`vectors`)
//! - Correlation verification of a vector batch (`vectors`)
//! - Monte Carlo estimation of the unit-ball volume (`mc`)
//!
//! Every operation takes an explicit [`SamplerRng`] (or a seed), so results
//! are reproducible and concurrent callers never share a generator.
//!
//! ## No I/O, No Logging
//!
//! The crate consumes already-parsed parameters and returns numbers or a
//! [`SamplingError`]. Display, persistence and logging belong to the caller
//! (see the `service_cli` crate).
//!
//! ## Usage Example
//!
//! ```rust
//! use sampling_core::prelude::*;
//!
//! let mut rng = SamplerRng::from_seed(42);
//!
//! let spec = DistributionSpec::from_parts("uniform", &[0.0, 1.0]).unwrap();
//! let draws = sample(&spec, 10_000, &mut rng).unwrap();
//! let score = uniformity_score(&draws.to_f64_vec(), DEFAULT_BIN_COUNT).unwrap();
//! assert!(score >= 0.0);
//!
//! let batch = decorrelated_vectors(3, 1000, &mut rng).unwrap();
//! assert!(is_uncorrelated(&batch, DEFAULT_TOLERANCE).unwrap());
//!
//! let estimate = estimate_ball_volume(2, 100_000, &mut rng).unwrap();
//! assert!((estimate.volume - std::f64::consts::PI).abs() < 0.05);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialisation for `DistributionSpec`, `SampleSet` and `VolumeEstimate`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod distributions;
pub mod error;
pub mod mc;
pub mod rng;
pub mod uniformity;
pub mod vectors;

pub use error::{Result, SamplingError};
pub use rng::SamplerRng;

/// Commonly used types and operations.
pub mod prelude {
    pub use crate::distributions::{
        sample, sample_tagged, DistributionKind, DistributionSpec, SampleSet, DEFAULT_SAMPLE_SIZE,
    };
    pub use crate::error::{Result, SamplingError};
    pub use crate::mc::{
        estimate_ball_volume, estimate_ball_volume_parallel, VolumeEstimate,
        DEFAULT_VOLUME_SAMPLES,
    };
    pub use crate::rng::SamplerRng;
    pub use crate::uniformity::{uniformity_score, DEFAULT_BIN_COUNT};
    pub use crate::vectors::{
        decorrelated_vectors, is_uncorrelated, VectorBatch, DEFAULT_TOLERANCE,
        DEFAULT_VECTOR_COUNT,
    };
}
