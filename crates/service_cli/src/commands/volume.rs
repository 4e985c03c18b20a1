//! Volume command implementation
//!
//! Estimates the unit-ball volume by Monte Carlo and compares it with the
//! closed form.

use std::time::Instant;

use sampling_core::analytical::{relative_error, unit_ball_volume};
use sampling_core::mc::{estimate_ball_volume, estimate_ball_volume_parallel, VolumeEstimate};
use sampling_core::SamplerRng;
use tracing::info;

use crate::Result;

/// Run the volume command
///
/// The parallel path splits the work across independent streams of `seed`,
/// so its estimate differs from the sequential one for the same seed.
pub fn run(dimension: usize, samples: usize, parallel: bool, seed: u64) -> Result<VolumeEstimate> {
    info!("Estimating unit-ball volume");
    info!("  Dimension: {}, samples: {}", dimension, samples);
    info!("  Seed: {}, parallel: {}", seed, parallel);

    let start = Instant::now();
    let estimate = if parallel {
        estimate_ball_volume_parallel(dimension, samples, seed)?
    } else {
        estimate_ball_volume(dimension, samples, &mut SamplerRng::from_seed(seed))?
    };
    info!("Estimation took {:?}", start.elapsed());

    let exact = unit_ball_volume(dimension);

    println!("Dimension:       {}", estimate.dimension);
    println!("Samples:         {}", estimate.sample_count);
    println!("Inside:          {}", estimate.inside);
    println!("Estimate:        {:.6}", estimate.volume);
    println!("Std error:       {:.6}", estimate.std_error);
    println!(
        "95% interval:    [{:.6}, {:.6}]",
        estimate.volume - estimate.confidence_95(),
        estimate.volume + estimate.confidence_95()
    );
    println!("Analytical:      {:.6}", exact);
    println!(
        "Relative error:  {}",
        format_relative_error(estimate.volume, exact)
    );

    Ok(estimate)
}

/// Formats the relative error as a percentage.
///
/// Above a few hundred dimensions the closed form underflows to zero and
/// there is nothing to compare against.
fn format_relative_error(estimate: f64, exact: f64) -> String {
    if exact > 0.0 {
        format!("{:.4}%", relative_error(estimate, exact) * 100.0)
    } else {
        "n/a (analytical volume underflows f64)".to_string()
    }
}
