//! Rectangular batches of real vectors.

use nalgebra::DMatrix;

use crate::error::{Result, SamplingError};

/// A `count × dimension` matrix holding `count` vectors of `dimension`
/// components each.
///
/// Rows are vectors (observations); columns are components (variables).
///
/// # Examples
///
/// ```rust
/// use sampling_core::vectors::VectorBatch;
///
/// let batch = VectorBatch::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]).unwrap();
/// assert_eq!(batch.count(), 3);
/// assert_eq!(batch.dimension(), 2);
/// assert_eq!(batch.row(1), Some(vec![3.0, 4.0]));
/// assert_eq!(batch.column(0), Some(vec![1.0, 3.0, 5.0]));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct VectorBatch {
    data: DMatrix<f64>,
}

impl VectorBatch {
    /// Wraps an existing matrix; rows become vectors.
    #[inline]
    pub fn from_matrix(data: DMatrix<f64>) -> Self {
        Self { data }
    }

    /// Builds a batch from caller-supplied rows.
    ///
    /// # Errors
    ///
    /// `InvalidParameters` if there are no rows, the rows are empty, or the
    /// rows differ in length.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let dimension = match rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => {
                return Err(SamplingError::invalid_parameter(
                    "rows",
                    "batch must contain at least one non-empty row",
                ))
            }
        };

        if let Some((index, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != dimension) {
            return Err(SamplingError::invalid_parameter(
                "rows",
                format!(
                    "row {} has {} components, expected {}",
                    index,
                    row.len(),
                    dimension
                ),
            ));
        }

        Ok(Self {
            data: DMatrix::from_fn(rows.len(), dimension, |i, j| rows[i][j]),
        })
    }

    /// Number of vectors (rows).
    #[inline]
    pub fn count(&self) -> usize {
        self.data.nrows()
    }

    /// Number of components per vector (columns).
    #[inline]
    pub fn dimension(&self) -> usize {
        self.data.ncols()
    }

    /// Borrows the underlying matrix.
    #[inline]
    pub fn as_matrix(&self) -> &DMatrix<f64> {
        &self.data
    }

    /// Consumes the batch, returning the underlying matrix.
    #[inline]
    pub fn into_matrix(self) -> DMatrix<f64> {
        self.data
    }

    /// Copies out vector `index`, or `None` if out of range.
    pub fn row(&self, index: usize) -> Option<Vec<f64>> {
        (index < self.count()).then(|| self.data.row(index).iter().copied().collect())
    }

    /// Copies out component `index` across all vectors, or `None` if out of range.
    pub fn column(&self, index: usize) -> Option<Vec<f64>> {
        (index < self.dimension()).then(|| self.data.column(index).iter().copied().collect())
    }

    /// Copies the batch out as a list of rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.data
            .row_iter()
            .map(|row| row.iter().copied().collect())
            .collect()
    }

    /// Average squared Euclidean length of the vectors.
    pub fn mean_squared_norm(&self) -> f64 {
        if self.count() == 0 {
            return 0.0;
        }
        self.data.norm_squared() / self.count() as f64
    }
}
