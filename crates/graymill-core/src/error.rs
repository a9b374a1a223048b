//! Error types for the Graymill pipeline.
//!
//! Errors are organized by layer: container-format errors raised by the
//! decoder, pipeline errors covering everything between buffer-in and
//! buffer-out, and configuration errors from the ambient config layer.
//! Every failure is terminal for the call that produced it: no stage has
//! transient failure modes, so nothing is ever retried.

use thiserror::Error;

/// Top-level error type for Graymill operations.
#[derive(Error, Debug)]
pub enum GraymillError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Pipeline processing errors
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    /// General I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Container-format errors raised by the decoder.
#[derive(Error, Debug)]
pub enum FormatError {
    /// Buffer cannot hold the fixed 12-byte header
    #[error("image buffer too small: {len} bytes, header needs {min}")]
    BufferTooSmall { len: usize, min: usize },
}

/// Processing errors, wrapping the originating stage's cause.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Container decoding failed
    #[error("invalid image container: {0}")]
    Format(#[from] FormatError),

    /// Raster has no defined aspect ratio
    #[error("degenerate raster: {width}x{height} has no aspect ratio")]
    DegenerateRaster { width: u32, height: u32 },

    /// Resize bounds must both be positive
    #[error("invalid resize bounds: {max_width}x{max_height}")]
    InvalidBounds { max_width: u32, max_height: u32 },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Convenience type alias for Graymill results.
pub type Result<T> = std::result::Result<T, GraymillError>;

/// Convenience type alias for pipeline-specific results.
pub type PipelineResult<T> = std::result::Result<T, PipelineError>;
