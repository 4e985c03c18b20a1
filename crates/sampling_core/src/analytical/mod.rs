//! Closed-form reference values.
//!
//! These formulas validate the stochastic estimators; no estimator falls
//! back to them.
//!
//! # Available Solutions
//!
//! - **Unit-ball volume**: `π^{n/2} / Γ(n/2 + 1)` via the two-step recurrence
//! - **Maximal uniformity score**: occupancy variance of a single full bin

mod ball;

pub use ball::{relative_error, unit_ball_volume};

/// Occupancy variance when all `sample_size` values fall in one of
/// `bin_count` bins: `n²(B − 1) / B²`.
///
/// This is the largest score [`uniformity_score`](crate::uniformity::uniformity_score)
/// can produce for the given sizes. Returns 0 when `bin_count` is 0.
///
/// # Examples
///
/// ```rust
/// use sampling_core::analytical::max_uniformity_score;
///
/// assert_eq!(max_uniformity_score(100, 10), 900.0);
/// assert_eq!(max_uniformity_score(100, 1), 0.0);
/// ```
pub fn max_uniformity_score(sample_size: usize, bin_count: usize) -> f64 {
    if bin_count == 0 {
        return 0.0;
    }
    let n = sample_size as f64;
    let bins = bin_count as f64;
    n * n * (bins - 1.0) / (bins * bins)
}
