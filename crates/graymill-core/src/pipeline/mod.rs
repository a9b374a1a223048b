//! The image processing pipeline.
//!
//! Stages, in the order the processor runs them:
//! - **decode**: parse the container into a [`crate::raster::Raster`]
//! - **resample**: bilinear resize to bounded target dimensions
//! - **grayscale**: luma-weighted reduction to a single channel
//! - **encode**: serialize back into the container format
//! - **processor**: orchestrates the full buffer-to-buffer run
//! - **discovery**: find container files for batch hosts

pub mod decode;
pub mod discovery;
pub mod encode;
pub mod grayscale;
pub mod processor;
pub mod resample;

// Re-exports for convenient access
pub use decode::{decode, header_is_plausible, read_header, HEADER_LEN};
pub use discovery::{DiscoveredFile, FileDiscovery};
pub use encode::encode;
pub use grayscale::to_grayscale;
pub use processor::ImageProcessor;
pub use resample::resample;
