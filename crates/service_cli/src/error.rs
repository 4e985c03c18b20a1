//! Error types for the randlab CLI.

use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Sampling engine rejected the request
    #[error(transparent)]
    Sampling(#[from] sampling_core::SamplingError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialisation error
    #[error("Serialisation error: {0}")]
    Serialisation(#[from] serde_json::Error),

    /// Invalid command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use sampling_core::SamplingError;

    #[test]
    fn test_sampling_error_is_transparent() {
        let err: CliError = SamplingError::InvalidDistribution("zipf".into()).into();
        assert_eq!(
            err.to_string(),
            "Invalid distribution 'zipf': expected normal, uniform or binomial"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err: CliError = ConfigError::Validation(vec!["a".into(), "b".into()]).into();
        assert_eq!(err.to_string(), "Configuration error: Validation errors: a; b");
    }
}
