//! Error types for figure rendering.

use thiserror::Error;

/// Errors that can occur while rendering or encoding a figure.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Cannot allocate a {width}x{height} canvas")]
    Canvas { width: u32, height: u32 },

    #[error("Figure {width}x{height} leaves no room for the plot area after margins")]
    Layout { width: u32, height: u32 },

    #[error("Pixel buffer holds {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },

    #[error("PNG encoding failed: {0}")]
    Encode(#[from] std::io::Error),
}

/// Result type for rendering operations.
pub type Result<T> = std::result::Result<T, RenderError>;
