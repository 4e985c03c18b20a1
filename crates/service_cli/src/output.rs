//! Sample persistence and text rendering.

use std::path::Path;

use clap::ValueEnum;
use sampling_core::distributions::SampleSet;
use sampling_core::uniformity::{bin_counts, normalise};
use sampling_core::SamplingError;

use crate::Result;

/// Widest histogram bar, in characters.
pub const HISTOGRAM_WIDTH: usize = 50;

/// On-disk format for a saved sample set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum SaveFormat {
    /// JSON list of numbers
    #[default]
    Json,
    /// Raw little-endian `f64` values
    Binary,
}

/// Encodes a sample set as a JSON list.
pub fn encode_json(samples: &SampleSet) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(samples)?)
}

/// Encodes a sample set as consecutive little-endian `f64` values.
///
/// Discrete draws are widened to `f64`, so every file has the same layout.
pub fn encode_binary(samples: &SampleSet) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(samples.len() * std::mem::size_of::<f64>());
    for value in samples.iter_f64() {
        bytes.extend_from_slice(&value.to_le_bytes());
    }
    bytes
}

/// Writes a sample set to `path` in the requested format.
pub fn save_sample(path: &Path, samples: &SampleSet, format: SaveFormat) -> Result<()> {
    let bytes = match format {
        SaveFormat::Json => encode_json(samples)?,
        SaveFormat::Binary => encode_binary(samples),
    };
    std::fs::write(path, bytes)?;
    Ok(())
}

/// Bins values into `bins` equal-width buckets spanning their min..max.
///
/// A constant sample lands entirely in the first bucket.
pub fn histogram(values: &[f64], bins: usize) -> Result<Vec<usize>> {
    match normalise(values) {
        Ok(scaled) => Ok(bin_counts(&scaled, bins)?),
        Err(SamplingError::DegenerateRange { .. }) if bins > 0 => {
            let mut counts = vec![0; bins];
            counts[0] = values.len();
            Ok(counts)
        }
        Err(e) => Err(e.into()),
    }
}

/// Renders a horizontal text histogram, one line per bucket.
///
/// Each line carries the bucket's lower edge, a bar scaled to the fullest
/// bucket and the raw count.
pub fn render_histogram(values: &[f64], bins: usize) -> Result<String> {
    let counts = histogram(values, bins)?;
    let peak = counts.iter().copied().max().unwrap_or(0).max(1);

    let low = values.iter().copied().fold(f64::INFINITY, f64::min);
    let high = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    // Divided before subtracting so extreme ranges stay finite.
    let step = high / bins as f64 - low / bins as f64;

    let mut out = String::new();
    for (i, &count) in counts.iter().enumerate() {
        let bar = count * HISTOGRAM_WIDTH / peak;
        let edge = low + step * i as f64;
        out.push_str(&format!(
            "{:>12.4} | {:<width$} {}\n",
            edge,
            "#".repeat(bar),
            count,
            width = HISTOGRAM_WIDTH
        ));
    }
    Ok(out)
}
