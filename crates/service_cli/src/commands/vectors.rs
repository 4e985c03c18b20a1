//! Vectors command implementation
//!
//! Generates a decorrelated batch and verifies it.

use std::time::Instant;

use sampling_core::vectors::{decorrelated_vectors, is_uncorrelated, max_off_diagonal_correlation};
use sampling_core::SamplerRng;
use tracing::{debug, info, warn};

use crate::Result;

/// Outcome of the vectors command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VectorsReport {
    pub max_correlation: f64,
    pub uncorrelated: bool,
}

/// Run the vectors command
pub fn run(
    dimension: usize,
    count: usize,
    tolerance: f64,
    rng: &mut SamplerRng,
) -> Result<VectorsReport> {
    info!("Generating decorrelated vectors");
    info!("  Dimension: {}, count: {}", dimension, count);
    info!("  Seed: {}", rng.seed());

    let start = Instant::now();
    let batch = decorrelated_vectors(dimension, count, rng)?;
    debug!("QR orthogonalisation took {:?}", start.elapsed());

    let uncorrelated = is_uncorrelated(&batch, tolerance)?;
    let max_correlation = max_off_diagonal_correlation(&batch)?;

    println!("Vectors:         {} x {}", batch.count(), batch.dimension());
    println!("Max |corr|:      {:.6}", max_correlation);
    println!("Tolerance:       {}", tolerance);
    println!(
        "Verdict:         {}",
        if uncorrelated { "uncorrelated" } else { "CORRELATED" }
    );

    if !uncorrelated {
        warn!(
            "Residual correlation {:.6} is not below {}",
            max_correlation, tolerance
        );
    }

    Ok(VectorsReport {
        max_correlation,
        uncorrelated,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;
    use sampling_core::SamplingError;

    #[test]
    fn test_default_sizes_pass() {
        let report = run(4, 1000, 0.1, &mut SamplerRng::from_seed(11)).unwrap();
        assert!(report.uncorrelated);
        assert!(report.max_correlation < 0.1);
    }

    #[test]
    fn test_verdict_matches_engine() {
        let report = run(3, 50, 0.05, &mut SamplerRng::from_seed(2)).unwrap();
        let batch = decorrelated_vectors(3, 50, &mut SamplerRng::from_seed(2)).unwrap();
        assert_eq!(report.uncorrelated, is_uncorrelated(&batch, 0.05).unwrap());
    }

    #[test]
    fn test_count_below_dimension() {
        let result = run(5, 3, 0.1, &mut SamplerRng::from_seed(11));
        assert!(matches!(result, Err(CliError::Sampling(_))));
    }

    #[test]
    fn test_bad_tolerance() {
        for tolerance in [0.0, -0.1, f64::NAN] {
            let result = run(2, 100, tolerance, &mut SamplerRng::from_seed(11));
            assert!(matches!(
                result,
                Err(CliError::Sampling(SamplingError::InvalidParameters { name: "tolerance", .. }))
            ));
        }
    }
}
