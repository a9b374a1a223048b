//! Graymill Core - Embeddable raster resize pipeline.
//!
//! Graymill takes a byte buffer holding a simple raw-container image,
//! shrinks it to fit within a bounding box while preserving aspect
//! ratio, reduces it to single-channel grayscale, and re-encodes it
//! into the same container.
//!
//! # Architecture
//!
//! A pure buffer-to-buffer pipeline with no I/O:
//!
//! ```text
//! Buffer → Decode → Resample → Grayscale → Encode → Buffer
//! ```
//!
//! Every stage is a stateless pure function over owned values, so
//! independent pipeline runs can execute concurrently without any
//! coordination.
//!
//! # Usage
//!
//! ```rust,ignore
//! use graymill_core::{Config, ImageProcessor};
//!
//! fn main() -> graymill_core::Result<()> {
//!     let config = Config::load()?;
//!     let processor = ImageProcessor::new(&config);
//!
//!     let thumbnail = processor.process_with_bounds(&bytes, 256, 256)?;
//!     std::fs::write("thumb.gmi", thumbnail)?;
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod config;
pub mod error;
pub mod pipeline;
pub mod raster;

// Re-exports for convenient access
pub use config::Config;
pub use error::{
    ConfigError, FormatError, GraymillError, PipelineError, PipelineResult, Result,
};
pub use pipeline::{DiscoveredFile, FileDiscovery, ImageProcessor, HEADER_LEN};
pub use raster::Raster;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_processor_from_default_config() {
        let processor = ImageProcessor::new(&Config::default());
        let mut buf = Vec::new();
        buf.extend_from_slice(&1i32.to_be_bytes());
        buf.extend_from_slice(&1i32.to_be_bytes());
        buf.extend_from_slice(&1i32.to_be_bytes());
        buf.push(42);

        let out = processor.process(&buf).unwrap();
        assert_eq!(out, buf);
    }
}
