//! Sample command implementation
//!
//! Draws from a distribution, prints summary statistics and a text
//! histogram, and optionally saves the draws.

use std::path::Path;
use std::time::Instant;

use sampling_core::distributions::{sample, DistributionSpec, SampleSet};
use sampling_core::SamplerRng;
use tracing::{debug, info};

use crate::output::{render_histogram, save_sample, SaveFormat};
use crate::{CliError, Result};

/// Options for the sample command.
pub struct SampleOptions<'a> {
    pub distribution: &'a str,
    pub params: &'a [f64],
    pub size: usize,
    pub histogram_bins: usize,
    pub output: Option<&'a Path>,
    pub format: Option<SaveFormat>,
}

/// Run the sample command
pub fn run(options: &SampleOptions<'_>, rng: &mut SamplerRng) -> Result<SampleSet> {
    if options.format.is_some() && options.output.is_none() {
        return Err(CliError::InvalidArgument(
            "--format only applies together with --output".to_string(),
        ));
    }

    let spec = DistributionSpec::from_parts(options.distribution, options.params)?;

    info!("Sampling {}", spec);
    info!("  Size: {}", options.size);
    info!("  Seed: {}", rng.seed());

    let start = Instant::now();
    let draws = sample(&spec, options.size, rng)?;
    debug!("Drew {} values in {:?}", draws.len(), start.elapsed());

    print_summary(&spec, &draws);
    println!();
    print!("{}", render_histogram(&draws.to_f64_vec(), options.histogram_bins)?);

    if let Some(path) = options.output {
        let format = options.format.unwrap_or_default();
        save_sample(path, &draws, format)?;
        info!("Saved {} values to {} ({:?})", draws.len(), path.display(), format);
    }

    Ok(draws)
}

fn print_summary(spec: &DistributionSpec, draws: &SampleSet) {
    println!("Distribution: {}", spec);
    println!("Count:        {}", draws.len());
    if let (Some(mean), Some(min), Some(max)) = (draws.mean(), draws.min(), draws.max()) {
        println!("Mean:         {:.5}", mean);
        println!("Min:          {:.5}", min);
        println!("Max:          {:.5}", max);
    }
    if let Some(std_dev) = draws.std_dev() {
        println!("Std dev:      {:.5}", std_dev);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options<'a>(distribution: &'a str, params: &'a [f64]) -> SampleOptions<'a> {
        SampleOptions {
            distribution,
            params,
            size: 200,
            histogram_bins: 30,
            output: None,
            format: None,
        }
    }

    #[test]
    fn test_run_is_reproducible() {
        let a = run(&options("normal", &[0.0, 1.0]), &mut SamplerRng::from_seed(3)).unwrap();
        let b = run(&options("normal", &[0.0, 1.0]), &mut SamplerRng::from_seed(3)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 200);
    }

    #[test]
    fn test_run_saves_binomial_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binomial.json");
        let opts = SampleOptions {
            output: Some(&path),
            ..options("binomial", &[10.0, 0.5])
        };

        let draws = run(&opts, &mut SamplerRng::from_seed(1)).unwrap();
        let saved: Vec<u64> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved.len(), draws.len());
        assert!(saved.iter().all(|&k| k <= 10));
    }

    #[test]
    fn test_run_saves_binary_when_asked() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("uniform.bin");
        let opts = SampleOptions {
            output: Some(&path),
            format: Some(SaveFormat::Binary),
            ..options("uniform", &[-1.0, 1.0])
        };

        run(&opts, &mut SamplerRng::from_seed(4)).unwrap();
        assert_eq!(std::fs::read(&path).unwrap().len(), 200 * 8);
    }

    #[test]
    fn test_format_without_output_rejected() {
        let opts = SampleOptions {
            format: Some(SaveFormat::Binary),
            ..options("uniform", &[0.0, 1.0])
        };
        let result = run(&opts, &mut SamplerRng::from_seed(1));
        assert!(matches!(result, Err(CliError::InvalidArgument(_))));
    }

    #[test]
    fn test_run_unknown_distribution() {
        let result = run(&options("cauchy", &[0.0, 1.0]), &mut SamplerRng::from_seed(1));
        assert!(matches!(result, Err(CliError::Sampling(_))));
    }
}
