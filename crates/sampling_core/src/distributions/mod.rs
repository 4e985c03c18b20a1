//! Parametric distributions and the sampler that draws from them.
//!
//! - [`DistributionSpec`]: a validated family tag plus its parameter pair
//! - [`SampleSet`]: the owned output of one sampler invocation
//! - [`sample`]: draws a fixed-size sample from a specification
//!
//! # Examples
//!
//! ```rust
//! use sampling_core::distributions::{sample, DistributionSpec};
//! use sampling_core::rng::SamplerRng;
//!
//! let mut rng = SamplerRng::from_seed(42);
//! let spec = DistributionSpec::uniform(2.0, 5.0).unwrap();
//! let draws = sample(&spec, 1000, &mut rng).unwrap();
//!
//! assert_eq!(draws.len(), 1000);
//! assert!(draws.to_f64_vec().iter().all(|&v| (2.0..5.0).contains(&v)));
//! ```

mod sample_set;
mod sampler;
mod spec;

pub use sample_set::{SampleIter, SampleSet};
pub use sampler::{sample, sample_tagged, DEFAULT_SAMPLE_SIZE};
pub use spec::{DistributionKind, DistributionSpec};
