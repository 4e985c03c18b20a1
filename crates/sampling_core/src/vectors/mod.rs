//! Decorrelated random vectors and the correlation check that verifies them.
//!
//! - [`VectorBatch`]: `count × dimension` matrix, one vector per row
//! - [`decorrelated_vectors`]: orthogonalised Gaussian batch (Householder QR)
//! - [`is_uncorrelated`]: Pearson correlation check across columns
//!
//! # Examples
//!
//! ```rust
//! use sampling_core::rng::SamplerRng;
//! use sampling_core::vectors::{decorrelated_vectors, is_uncorrelated, DEFAULT_TOLERANCE};
//!
//! let mut rng = SamplerRng::from_seed(42);
//! let batch = decorrelated_vectors(4, 1000, &mut rng).unwrap();
//!
//! assert_eq!(batch.count(), 1000);
//! assert_eq!(batch.dimension(), 4);
//! assert!(is_uncorrelated(&batch, DEFAULT_TOLERANCE).unwrap());
//! ```

mod batch;
mod correlation;
mod decorrelate;

pub use batch::VectorBatch;
pub use correlation::{
    correlation_matrix, is_uncorrelated, max_off_diagonal_correlation, DEFAULT_TOLERANCE,
};
pub use decorrelate::{decorrelated_vectors, DEFAULT_VECTOR_COUNT};
