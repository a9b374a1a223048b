//! Luminance-weighted grayscale reduction.

use crate::raster::Raster;

/// Red weight of the luma reduction.
const LUMA_R: f32 = 0.299;

/// Green weight of the luma reduction.
const LUMA_G: f32 = 0.587;

/// Blue weight of the luma reduction.
const LUMA_B: f32 = 0.114;

/// Reduce a raster to a single channel.
///
/// Rasters with three or more channels are reduced with the standard
/// luma weights over the first three samples of each pixel; a fourth
/// (alpha) sample is ignored. Rasters with one or two channels pass
/// their first sample through unweighted. The weighted result is
/// truncated to `u8`, not rounded.
///
/// Missing samples on degraded-path rasters read as zero.
pub fn to_grayscale(src: &Raster) -> Raster {
    let channels = src.channels as usize;
    let mut samples = Vec::with_capacity(src.pixel_count());

    let sample = |idx: usize| src.samples.get(idx).copied().unwrap_or(0);

    for i in 0..src.pixel_count() {
        let value = if src.channels >= 3 {
            let r = sample(i * channels) as f32;
            let g = sample(i * channels + 1) as f32;
            let b = sample(i * channels + 2) as f32;
            (LUMA_R * r + LUMA_G * g + LUMA_B * b) as u8
        } else {
            sample(i * channels)
        };
        samples.push(value);
    }

    Raster::new(src.width, src.height, 1, samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_color_weights() {
        let src = Raster::new(3, 1, 3, vec![255, 0, 0, 0, 255, 0, 0, 0, 255]);
        let out = to_grayscale(&src);

        assert_eq!(out.channels, 1);
        assert_eq!(out.samples, vec![76, 149, 29]);
    }

    #[test]
    fn test_white_stays_white() {
        let src = Raster::new(1, 1, 3, vec![255, 255, 255]);
        let out = to_grayscale(&src);
        // The f32 blend of the three weighted terms lands exactly on 255.
        assert_eq!(out.samples, vec![255]);
    }

    #[test]
    fn test_alpha_is_ignored() {
        let with_alpha = Raster::new(1, 1, 4, vec![255, 0, 0, 128]);
        let without = Raster::new(1, 1, 3, vec![255, 0, 0]);
        assert_eq!(to_grayscale(&with_alpha).samples, to_grayscale(&without).samples);
    }

    #[test]
    fn test_single_channel_passes_through() {
        let src = Raster::new(2, 2, 1, vec![0, 85, 170, 255]);
        let out = to_grayscale(&src);
        assert_eq!(out.samples, src.samples);
    }

    #[test]
    fn test_two_channel_takes_first_sample() {
        let src = Raster::new(2, 1, 2, vec![10, 99, 20, 99]);
        let out = to_grayscale(&src);
        assert_eq!(out.samples, vec![10, 20]);
    }

    #[test]
    fn test_short_sample_buffer_reads_zero() {
        // Declared 2x1 RGB carrying only one pixel: the second reduces
        // over zeros.
        let src = Raster::new(2, 1, 3, vec![0, 255, 0]);
        let out = to_grayscale(&src);
        assert_eq!(out.samples, vec![149, 0]);
    }

    #[test]
    fn test_output_is_complete() {
        let src = Raster::new(4, 4, 3, vec![0; 48]);
        let out = to_grayscale(&src);
        assert!(out.is_complete());
        assert_eq!(out.expected_samples(), 16);
    }
}
