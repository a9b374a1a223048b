//! Pipeline orchestration - wires the codec stages together.

use std::time::Instant;

use crate::config::{Config, LimitsConfig};
use crate::error::{PipelineError, PipelineResult};
use crate::raster::Raster;

use super::decode::decode;
use super::encode::encode;
use super::grayscale::to_grayscale;
use super::resample::resample;

/// The main processor: container buffer in, resized grayscale container out.
///
/// Stateless apart from its configured default bounds; independent calls
/// may run concurrently from separate threads without coordination.
pub struct ImageProcessor {
    limits: LimitsConfig,
}

impl ImageProcessor {
    /// Create a processor with the given configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            limits: config.limits.clone(),
        }
    }

    /// Create a processor directly from limits.
    pub fn with_limits(limits: LimitsConfig) -> Self {
        Self { limits }
    }

    /// Process a buffer using the configured default bounds.
    pub fn process(&self, buffer: &[u8]) -> PipelineResult<Vec<u8>> {
        self.process_with_bounds(buffer, self.limits.max_width, self.limits.max_height)
    }

    /// Process a buffer with explicit bounds.
    ///
    /// Decodes the container, shrinks the raster to fit within
    /// `max_width` x `max_height` preserving aspect ratio (images already
    /// within bounds pass through unresampled), reduces to single-channel
    /// grayscale, and re-encodes. Fails before decoding when either bound
    /// is zero; never returns partial output.
    pub fn process_with_bounds(
        &self,
        buffer: &[u8],
        max_width: u32,
        max_height: u32,
    ) -> PipelineResult<Vec<u8>> {
        if max_width == 0 || max_height == 0 {
            return Err(PipelineError::InvalidBounds {
                max_width,
                max_height,
            });
        }

        let start = Instant::now();

        let img = decode(buffer)?;
        tracing::trace!(
            width = img.width,
            height = img.height,
            channels = img.channels,
            elapsed = ?start.elapsed(),
            "decoded"
        );

        let (new_width, new_height) = target_dimensions(&img, max_width, max_height)?;

        let resample_start = Instant::now();
        let resized = if (new_width, new_height) != (img.width, img.height) {
            let out = resample(&img, new_width, new_height);
            tracing::trace!(
                new_width,
                new_height,
                elapsed = ?resample_start.elapsed(),
                "resampled"
            );
            out
        } else {
            img
        };

        let gray = to_grayscale(&resized);
        let encoded = encode(&gray);

        tracing::debug!(
            in_bytes = buffer.len(),
            out_bytes = encoded.len(),
            out_width = gray.width,
            out_height = gray.height,
            elapsed = ?start.elapsed(),
            "processed image"
        );
        Ok(encoded)
    }
}

/// Compute the bounded target dimensions for a raster.
///
/// Clamping is sequential: the width bound is applied first, then the
/// height bound is applied to the possibly-updated height and may
/// override the first step's choice. Both reductions preserve the
/// source aspect ratio, truncating the derived dimension.
fn target_dimensions(
    img: &Raster,
    max_width: u32,
    max_height: u32,
) -> PipelineResult<(u32, u32)> {
    if img.height == 0 {
        return Err(PipelineError::DegenerateRaster {
            width: img.width,
            height: img.height,
        });
    }
    let aspect_ratio = img.width as f32 / img.height as f32;

    let mut new_width = img.width;
    let mut new_height = img.height;

    if img.width > max_width {
        new_width = max_width;
        new_height = (max_width as f32 / aspect_ratio) as u32;
    }
    if new_height > max_height {
        new_height = max_height;
        new_width = (max_height as f32 * aspect_ratio) as u32;
    }

    Ok((new_width, new_height))
}
