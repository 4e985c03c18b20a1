//! Pearson correlation across the components of a vector batch.

use nalgebra::DMatrix;

use super::VectorBatch;
use crate::error::{Result, SamplingError};

/// Largest absolute off-diagonal correlation accepted by default.
pub const DEFAULT_TOLERANCE: f64 = 0.1;

/// Sample Pearson correlation matrix of the batch's columns.
///
/// Each column is one variable observed `count` times. A column with zero
/// variance has undefined correlation; its row and column are NaN.
///
/// # Errors
///
/// `InsufficientSamples` if the batch has fewer than two rows.
pub fn correlation_matrix(batch: &VectorBatch) -> Result<DMatrix<f64>> {
    if batch.count() < 2 {
        return Err(SamplingError::InsufficientSamples {
            required: 2,
            actual: batch.count(),
        });
    }

    let mut centred = batch.as_matrix().clone();
    for mut column in centred.column_iter_mut() {
        let mean = column.iter().sum::<f64>() / column.len() as f64;
        for value in column.iter_mut() {
            *value -= mean;
        }
    }

    let scatter = centred.transpose() * &centred;
    let dimension = batch.dimension();
    Ok(DMatrix::from_fn(dimension, dimension, |i, j| {
        scatter[(i, j)] / (scatter[(i, i)] * scatter[(j, j)]).sqrt()
    }))
}

/// Largest absolute off-diagonal entry of the correlation matrix.
///
/// Returns 0 for a single-column batch and NaN if any correlation is
/// undefined.
///
/// # Errors
///
/// `InsufficientSamples` if the batch has fewer than two rows.
pub fn max_off_diagonal_correlation(batch: &VectorBatch) -> Result<f64> {
    let corr = correlation_matrix(batch)?;
    let mut max = 0.0_f64;
    for i in 0..corr.nrows() {
        for j in 0..corr.ncols() {
            if i == j {
                continue;
            }
            let value = corr[(i, j)].abs();
            if value.is_nan() {
                return Ok(f64::NAN);
            }
            max = max.max(value);
        }
    }
    Ok(max)
}

/// Returns true iff every off-diagonal correlation is strictly below `tolerance`
/// in absolute value.
///
/// Undefined correlations (a constant column) fail the check.
///
/// # Errors
///
/// - `InsufficientSamples` if the batch has fewer than two rows
/// - `InvalidParameters` if `tolerance` is not a finite positive number
///
/// # Examples
///
/// ```rust
/// use sampling_core::vectors::{is_uncorrelated, VectorBatch};
///
/// let linked = VectorBatch::from_rows(&[
///     vec![1.0, 2.0],
///     vec![2.0, 4.1],
///     vec![3.0, 5.9],
/// ]).unwrap();
/// assert!(!is_uncorrelated(&linked, 0.1).unwrap());
/// ```
pub fn is_uncorrelated(batch: &VectorBatch, tolerance: f64) -> Result<bool> {
    if !(tolerance.is_finite() && tolerance > 0.0) {
        return Err(SamplingError::invalid_parameter(
            "tolerance",
            format!("must be a finite positive number, got {}", tolerance),
        ));
    }
    let max = max_off_diagonal_correlation(batch)?;
    Ok(max < tolerance)
}
