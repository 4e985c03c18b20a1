//! # Random Number Generation
//!
//! Every operation in this crate draws from an explicit [`SamplerRng`]
//! handle passed in by the caller. There is no process-wide generator.
//!
//! ## Reproducibility
//!
//! - The same seed always produces the same sequence on every platform.
//! - [`SamplerRng::from_stream`] selects one of 2^64 independent ChaCha
//!   streams sharing a seed. Distinct streams never overlap, so each thread
//!   of a concurrent caller can own a stream and still be reproducible.
//! - [`SamplerRng::from_entropy`] picks a random seed and records it, so an
//!   unseeded run can still be replayed.
//!
//! ## Usage Example
//!
//! ```rust
//! use sampling_core::rng::SamplerRng;
//!
//! let mut rng = SamplerRng::from_seed(12345);
//!
//! let u = rng.gen_uniform();
//! let z = rng.gen_normal();
//! assert!((0.0..1.0).contains(&u));
//! assert!(z.is_finite());
//!
//! let mut buffer = vec![0.0; 1000];
//! rng.fill_normal(&mut buffer);
//! ```

mod prng;

pub use prng::SamplerRng;
