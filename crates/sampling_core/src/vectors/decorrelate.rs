//! Orthogonalised Gaussian vector batches.

use nalgebra::DMatrix;

use super::VectorBatch;
use crate::error::{Result, SamplingError};
use crate::rng::SamplerRng;

/// Batch size used when the caller does not choose one.
pub const DEFAULT_VECTOR_COUNT: usize = 1000;

/// Generates `count` vectors of `dimension` components whose components are
/// mutually uncorrelated.
///
/// A `count × dimension` matrix of standard normals is factorised with a
/// Householder QR decomposition. The thin orthogonal factor has orthonormal
/// columns; scaling it by `sqrt(count)` gives each column unit mean square,
/// so every vector has an expected squared length of `dimension`.
///
/// # Errors
///
/// `InvalidParameters` if `dimension` or `count` is zero, or if
/// `count < dimension` (the factor cannot supply that many orthonormal
/// columns).
pub fn decorrelated_vectors(
    dimension: usize,
    count: usize,
    rng: &mut SamplerRng,
) -> Result<VectorBatch> {
    if dimension == 0 {
        return Err(SamplingError::invalid_parameter(
            "dimension",
            "must be at least 1",
        ));
    }
    if count < dimension {
        return Err(SamplingError::invalid_parameter(
            "count",
            format!(
                "must be at least the dimension ({}), got {}",
                dimension, count
            ),
        ));
    }

    let gaussian = DMatrix::from_fn(count, dimension, |_, _| rng.gen_normal());
    let q = gaussian.qr().q();

    Ok(VectorBatch::from_matrix(q * (count as f64).sqrt()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_shape() {
        let mut rng = SamplerRng::from_seed(11);
        let batch = decorrelated_vectors(3, 50, &mut rng).unwrap();
        assert_eq!(batch.count(), 50);
        assert_eq!(batch.dimension(), 3);
    }

    #[test]
    fn test_columns_are_orthogonal_with_unit_mean_square() {
        let mut rng = SamplerRng::from_seed(11);
        let count = 200;
        let batch = decorrelated_vectors(6, count, &mut rng).unwrap();
        let gram = batch.as_matrix().transpose() * batch.as_matrix();

        for i in 0..6 {
            for j in 0..6 {
                let expected = if i == j { count as f64 } else { 0.0 };
                assert_relative_eq!(gram[(i, j)], expected, epsilon = 1e-8);
            }
        }
        assert_relative_eq!(batch.mean_squared_norm(), 6.0, epsilon = 1e-10);
    }

    #[test]
    fn test_square_batch_allowed() {
        let mut rng = SamplerRng::from_seed(11);
        let batch = decorrelated_vectors(4, 4, &mut rng).unwrap();
        assert_eq!(batch.count(), 4);
    }

    #[test]
    fn test_count_below_dimension_rejected() {
        let mut rng = SamplerRng::from_seed(11);
        assert!(matches!(
            decorrelated_vectors(5, 3, &mut rng),
            Err(SamplingError::InvalidParameters { name: "count", .. })
        ));
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let mut rng = SamplerRng::from_seed(11);
        assert!(matches!(
            decorrelated_vectors(0, 10, &mut rng),
            Err(SamplingError::InvalidParameters { name: "dimension", .. })
        ));
    }

    #[test]
    fn test_deterministic_under_seed() {
        let a = decorrelated_vectors(3, 30, &mut SamplerRng::from_seed(5)).unwrap();
        let b = decorrelated_vectors(3, 30, &mut SamplerRng::from_seed(5)).unwrap();
        let c = decorrelated_vectors(3, 30, &mut SamplerRng::from_seed(6)).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
