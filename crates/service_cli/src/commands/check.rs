//! Check command implementation
//!
//! Prints the effective configuration after file and environment overrides.

use std::path::Path;

use tracing::info;

use crate::config::CliConfig;
use crate::Result;

/// Run the check command
pub fn run(config_path: &Path, config: &CliConfig) -> Result<()> {
    info!("Checking configuration...");

    // Already validated on load; repeated so `check` stands alone.
    config.validate()?;

    let source = if config_path.exists() {
        config_path.display().to_string()
    } else {
        format!("{} (not found, using defaults)", config_path.display())
    };

    println!("Configuration:   {}", source);
    println!(
        "seed:            {}",
        config
            .seed
            .map_or_else(|| "entropy".to_string(), |s| s.to_string())
    );
    println!("sample_size:     {}", config.sample_size);
    println!("bin_count:       {}", config.bin_count);
    println!("histogram_bins:  {}", config.histogram_bins);
    println!("vector_count:    {}", config.vector_count);
    println!("volume_samples:  {}", config.volume_samples);
    println!("tolerance:       {}", config.tolerance);
    println!("log_level:       {}", config.log_level);
    println!("worker threads:  {}", available_threads());

    info!("Configuration OK");
    Ok(())
}

fn available_threads() -> usize {
    std::thread::available_parallelism().map_or(1, |n| n.get())
}
