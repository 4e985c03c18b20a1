//! randlab - Command Line Sampling and Randomness-Quality Checks
//!
//! This is the operational entry point for the sampling_core engine.
//!
//! # Commands
//!
//! - `randlab sample -d <tag> -p <a> <b>` - Draw a sample, print a histogram, optionally save it
//! - `randlab uniformity -d <tag> -p <a> <b>` - Score how evenly a sample fills its range
//! - `randlab vectors -n <dim>` - Generate and verify decorrelated vectors
//! - `randlab volume -n <dim>` - Estimate the unit-ball volume by Monte Carlo
//! - `randlab check` - Print the effective configuration
//!
//! # Configuration
//!
//! Defaults come from `randlab.toml` (or `--config`), then `RANDLAB_*`
//! environment variables, then command-line flags.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use sampling_core::SamplerRng;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

pub use error::{CliError, Result};

use config::CliConfig;
use output::SaveFormat;

/// randlab sampling and randomness-quality toolkit
#[derive(Parser)]
#[command(name = "randlab")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "randlab.toml")]
    config: PathBuf,

    /// Seed for the random source (drawn from entropy when omitted)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw a sample from a distribution
    Sample {
        /// Distribution family (normal, uniform, binomial)
        #[arg(short, long)]
        distribution: String,

        /// Two distribution parameters (mean std_dev | low high | trials probability)
        #[arg(short, long, num_args = 2, allow_negative_numbers = true, value_names = ["A", "B"])]
        params: Vec<f64>,

        /// Number of draws
        #[arg(short = 'n', long)]
        size: Option<usize>,

        /// Save the sample to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Format of the saved sample (default json)
        #[arg(short, long, value_enum, requires = "output")]
        format: Option<SaveFormat>,
    },

    /// Score the uniformity of a sample
    Uniformity {
        /// Distribution family (normal, uniform, binomial)
        #[arg(short, long)]
        distribution: String,

        /// Two distribution parameters
        #[arg(short, long, num_args = 2, allow_negative_numbers = true, value_names = ["A", "B"])]
        params: Vec<f64>,

        /// Number of draws
        #[arg(short = 'n', long)]
        size: Option<usize>,

        /// Number of histogram bins for the score
        #[arg(short, long)]
        bins: Option<usize>,
    },

    /// Generate decorrelated vectors and verify them
    Vectors {
        /// Vector dimension
        #[arg(short = 'n', long)]
        dimension: usize,

        /// Number of vectors (must be at least the dimension)
        #[arg(short = 'k', long)]
        count: Option<usize>,

        /// Largest acceptable absolute correlation
        #[arg(short, long)]
        tolerance: Option<f64>,
    },

    /// Estimate the volume of the unit ball
    Volume {
        /// Ball dimension
        #[arg(short = 'n', long)]
        dimension: usize,

        /// Number of Monte Carlo points
        #[arg(short = 'm', long)]
        samples: Option<usize>,

        /// Split the estimate across worker threads
        #[arg(short, long)]
        parallel: bool,
    },

    /// Check configuration
    Check,
}

fn init_tracing(config: &CliConfig, verbose: bool) {
    let default_level = if verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();
}

fn seeded_rng(seed: Option<u64>) -> SamplerRng {
    match seed {
        Some(seed) => SamplerRng::from_seed(seed),
        None => SamplerRng::from_entropy(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::resolve(&cli.config)?;
    init_tracing(&config, cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let mut rng = seeded_rng(cli.seed.or(config.seed));
    info!("Using seed {}", rng.seed());

    dispatch(cli.command, &cli.config, &config, &mut rng)
}

fn dispatch(
    command: Commands,
    config_path: &Path,
    config: &CliConfig,
    rng: &mut SamplerRng,
) -> Result<()> {
    match command {
        Commands::Sample {
            distribution,
            params,
            size,
            output,
            format,
        } => {
            let options = commands::sample::SampleOptions {
                distribution: &distribution,
                params: &params,
                size: size.unwrap_or(config.sample_size),
                histogram_bins: config.histogram_bins,
                output: output.as_deref(),
                format,
            };
            commands::sample::run(&options, rng).map(|_| ())
        }
        Commands::Uniformity {
            distribution,
            params,
            size,
            bins,
        } => commands::uniformity::run(
            &distribution,
            &params,
            size.unwrap_or(config.sample_size),
            bins.unwrap_or(config.bin_count),
            rng,
        )
        .map(|_| ()),
        Commands::Vectors {
            dimension,
            count,
            tolerance,
        } => commands::vectors::run(
            dimension,
            count.unwrap_or(config.vector_count),
            tolerance.unwrap_or(config.tolerance),
            rng,
        )
        .map(|_| ()),
        Commands::Volume {
            dimension,
            samples,
            parallel,
        } => commands::volume::run(
            dimension,
            samples.unwrap_or(config.volume_samples),
            parallel,
            rng.seed(),
        )
        .map(|_| ()),
        Commands::Check => commands::check::run(config_path, config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_negative_params() {
        let cli = Cli::try_parse_from([
            "randlab", "--seed", "42", "sample", "-d", "normal", "-p", "-3.5", "2",
        ])
        .unwrap();
        assert_eq!(cli.seed, Some(42));
        match cli.command {
            Commands::Sample { params, format, .. } => {
                assert_eq!(params, vec![-3.5, 2.0]);
                assert_eq!(format, None);
            }
            _ => panic!("Expected sample command"),
        }
    }

    #[test]
    fn test_format_requires_output() {
        let result = Cli::try_parse_from([
            "randlab", "sample", "-d", "uniform", "-p", "0", "1", "-f", "binary",
        ]);
        assert!(result.is_err());

        let cli = Cli::try_parse_from([
            "randlab", "sample", "-d", "uniform", "-p", "0", "1", "-f", "binary", "-o", "u.bin",
        ])
        .unwrap();
        match cli.command {
            Commands::Sample { format, .. } => assert_eq!(format, Some(SaveFormat::Binary)),
            _ => panic!("Expected sample command"),
        }
    }

    #[test]
    fn test_params_require_two_values() {
        let result = Cli::try_parse_from(["randlab", "sample", "-d", "normal", "-p", "1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_dispatch_with_defaults() {
        let config = CliConfig {
            vector_count: 200,
            ..CliConfig::default()
        };
        let mut rng = SamplerRng::from_seed(8);
        let command = Commands::Vectors {
            dimension: 3,
            count: None,
            tolerance: None,
        };
        assert!(dispatch(command, Path::new("randlab.toml"), &config, &mut rng).is_ok());
    }
}
