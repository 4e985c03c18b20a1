//! Volume of the n-dimensional unit ball.

use std::f64::consts::PI;

/// Exact volume of the unit ball in `dimension` dimensions.
///
/// Uses `V(0) = 1`, `V(1) = 2`, `V(n) = V(n − 2) · 2π / n`, which equals
/// `π^{n/2} / Γ(n/2 + 1)` without evaluating the gamma function.
///
/// # Examples
///
/// ```rust
/// use sampling_core::analytical::unit_ball_volume;
/// use std::f64::consts::PI;
///
/// assert_eq!(unit_ball_volume(1), 2.0);
/// assert!((unit_ball_volume(2) - PI).abs() < 1e-12);
/// assert!((unit_ball_volume(3) - 4.0 / 3.0 * PI).abs() < 1e-12);
/// ```
pub fn unit_ball_volume(dimension: usize) -> f64 {
    let mut volume = if dimension % 2 == 0 { 1.0 } else { 2.0 };
    let mut n = if dimension % 2 == 0 { 2 } else { 3 };
    while n <= dimension {
        volume *= 2.0 * PI / n as f64;
        n += 2;
    }
    volume
}

/// Relative error of an estimate against a non-zero reference value.
#[inline]
pub fn relative_error(estimate: f64, reference: f64) -> f64 {
    ((estimate - reference) / reference).abs()
}
