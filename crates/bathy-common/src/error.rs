//! Error types shared by the bathymetry crates.

use thiserror::Error;

/// Result type alias using BathyError.
pub type BathyResult<T> = Result<T, BathyError>;

/// Errors raised by the shared data model.
#[derive(Debug, Error)]
pub enum BathyError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}

impl BathyError {
    /// Create an InvalidConfig error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_message() {
        let err = BathyError::invalid_config("color_levels must be at least 1");
        assert_eq!(
            err.to_string(),
            "Invalid configuration: color_levels must be at least 1"
        );
    }
}
