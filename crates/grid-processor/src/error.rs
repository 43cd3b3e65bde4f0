//! Error types for grid processing.

use bathy_common::BathyError;
use thiserror::Error;

/// Errors that can occur during grid processing.
#[derive(Error, Debug)]
pub enum GridProcessorError {
    /// No samples to bound or interpolate.
    #[error("no valid samples to grid")]
    NoSamples,

    /// A sample carries a NaN or infinite coordinate or depth.
    #[error("sample {index} is not finite: lat={latitude}, lon={longitude}, depth={depth}")]
    NonFiniteSample {
        index: usize,
        latitude: f64,
        longitude: f64,
        depth: f64,
    },

    /// Configuration rejected by validation.
    #[error(transparent)]
    Config(#[from] BathyError),
}

/// Result type for grid processor operations.
pub type Result<T> = std::result::Result<T, GridProcessorError>;
