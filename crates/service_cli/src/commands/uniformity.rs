//! Uniformity command implementation
//!
//! Draws a sample and scores how evenly it fills its own range.

use sampling_core::analytical::max_uniformity_score;
use sampling_core::distributions::{sample, DistributionSpec};
use sampling_core::uniformity::uniformity_score;
use sampling_core::SamplerRng;
use tracing::info;

use crate::Result;

/// Run the uniformity command
pub fn run(
    distribution: &str,
    params: &[f64],
    size: usize,
    bins: usize,
    rng: &mut SamplerRng,
) -> Result<f64> {
    let spec = DistributionSpec::from_parts(distribution, params)?;

    info!("Scoring uniformity of {}", spec);
    info!("  Size: {}, bins: {}", size, bins);
    info!("  Seed: {}", rng.seed());

    let draws = sample(&spec, size, rng)?;
    let score = uniformity_score(&draws.to_f64_vec(), bins)?;

    println!("Uniformity score: {:.5}", score);
    println!(
        "Worst possible:   {:.5}",
        max_uniformity_score(draws.len(), bins)
    );

    Ok(score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_beats_normal() {
        let uniform = run("uniform", &[0.0, 1.0], 10_000, 10, &mut SamplerRng::from_seed(5)).unwrap();
        let normal = run("normal", &[0.0, 1.0], 10_000, 10, &mut SamplerRng::from_seed(5)).unwrap();
        assert!(uniform < normal);
    }

    #[test]
    fn test_zero_bins_rejected() {
        assert!(run("uniform", &[0.0, 1.0], 100, 0, &mut SamplerRng::from_seed(5)).is_err());
    }
}
