//! Container decoding with header validation and a fallback heuristic.
//!
//! The container is a fixed 12-byte header (width, height, channels as
//! big-endian signed 32-bit integers) followed by raw interleaved
//! samples. Headers that declare impossible dimensions are replaced by a
//! heuristic that treats the buffer as raw RGB with an assumed 100-pixel
//! edge; buffers whose payload is shorter than declared are passed through
//! verbatim with their declared dimensions kept.

use crate::error::FormatError;
use crate::raster::Raster;

/// Size of the fixed container header in bytes.
pub const HEADER_LEN: usize = 12;

/// Highest channel count the container admits.
pub const MAX_CHANNELS: i64 = 4;

/// Edge length assumed when the header is implausible.
const FALLBACK_EDGE: i64 = 100;

/// Channel count assumed when the header is implausible.
const FALLBACK_CHANNELS: i64 = 3;

/// Decode a container buffer into a [`Raster`].
///
/// Fails only when the buffer cannot hold the 12-byte header. Every
/// longer buffer decodes to *something*:
///
/// - A plausible header (positive dimensions, 1–4 channels) selects the
///   declared geometry.
/// - An implausible header engages the fallback: width 100, 3 channels,
///   height derived from the buffer length; if that height comes out
///   non-positive the assumption swaps to height 100 with the width
///   derived instead. The derivation divides the full buffer length,
///   header bytes included.
/// - If the buffer holds the full declared payload, samples are the
///   payload bytes after the header. Otherwise the whole buffer, header
///   included, becomes the sample buffer and the raster is returned
///   incomplete; downstream stages read the missing tail as zero.
pub fn decode(buffer: &[u8]) -> Result<Raster, FormatError> {
    let (declared_width, declared_height, declared_channels) = read_header(buffer)?;
    let mut width = declared_width as i64;
    let mut height = declared_height as i64;
    let mut channels = declared_channels as i64;

    if !header_is_plausible(declared_width, declared_height, declared_channels) {
        width = FALLBACK_EDGE;
        height = buffer.len() as i64 / (width * FALLBACK_CHANNELS);
        channels = FALLBACK_CHANNELS;

        if height <= 0 {
            height = FALLBACK_EDGE;
            width = buffer.len() as i64 / (height * FALLBACK_CHANNELS);
        }
        tracing::debug!(width, height, "implausible header, assuming raw RGB");
    }

    // Declared payload size, overflow-checked: a header whose payload
    // cannot be represented also cannot fit in the buffer, so overflow
    // routes into the short-payload path below.
    let payload_len = (width as u64)
        .checked_mul(height as u64)
        .and_then(|n| n.checked_mul(channels as u64));

    let samples = match payload_len {
        Some(n) if buffer.len() as u64 >= HEADER_LEN as u64 + n => {
            buffer[HEADER_LEN..HEADER_LEN + n as usize].to_vec()
        }
        _ => buffer.to_vec(),
    };

    Ok(Raster::new(
        width as u32,
        height as u32,
        channels as u32,
        samples,
    ))
}

/// Read the declared header fields without decoding the payload.
///
/// Fails under exactly the same condition as [`decode`]: a buffer
/// shorter than the 12-byte header.
pub fn read_header(buffer: &[u8]) -> Result<(i32, i32, i32), FormatError> {
    if buffer.len() < HEADER_LEN {
        return Err(FormatError::BufferTooSmall {
            len: buffer.len(),
            min: HEADER_LEN,
        });
    }
    Ok((
        read_be_i32(buffer, 0),
        read_be_i32(buffer, 4),
        read_be_i32(buffer, 8),
    ))
}

/// Whether declared header fields describe a decodable geometry.
///
/// Implausible headers send [`decode`] into its fallback heuristic.
pub fn header_is_plausible(width: i32, height: i32, channels: i32) -> bool {
    width > 0 && height > 0 && channels > 0 && channels as i64 <= MAX_CHANNELS
}

fn read_be_i32(buf: &[u8], offset: usize) -> i32 {
    i32::from_be_bytes([
        buf[offset],
        buf[offset + 1],
        buf[offset + 2],
        buf[offset + 3],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(width: i32, height: i32, channels: i32) -> Vec<u8> {
        let mut buf = Vec::with_capacity(HEADER_LEN);
        buf.extend_from_slice(&width.to_be_bytes());
        buf.extend_from_slice(&height.to_be_bytes());
        buf.extend_from_slice(&channels.to_be_bytes());
        buf
    }

    #[test]
    fn test_buffer_shorter_than_header_fails() {
        let err = decode(&[0u8; 11]).unwrap_err();
        assert!(matches!(err, FormatError::BufferTooSmall { len: 11, .. }));
    }

    #[test]
    fn test_buffer_of_exactly_header_len_never_fails() {
        assert!(decode(&[0u8; 12]).is_ok());
    }

    #[test]
    fn test_plausible_header_decodes_declared_payload() {
        let mut buf = header(2, 2, 1);
        buf.extend_from_slice(&[1, 2, 3, 4]);

        let raster = decode(&buf).unwrap();
        assert_eq!(raster.width, 2);
        assert_eq!(raster.height, 2);
        assert_eq!(raster.channels, 1);
        assert_eq!(raster.samples, vec![1, 2, 3, 4]);
        assert!(raster.is_complete());
    }

    #[test]
    fn test_trailing_bytes_beyond_payload_are_dropped() {
        let mut buf = header(1, 1, 3);
        buf.extend_from_slice(&[7, 8, 9, 99, 99]);

        let raster = decode(&buf).unwrap();
        assert_eq!(raster.samples, vec![7, 8, 9]);
    }

    #[test]
    fn test_implausible_header_engages_fallback() {
        // Negative width, 600 bytes total: width 100, 3 channels assumed,
        // height derived from the whole buffer length (600 / 300 = 2).
        let mut buf = header(-5, 40, 3);
        buf.resize(600, 0xAB);

        let raster = decode(&buf).unwrap();
        assert_eq!(raster.width, 100);
        assert_eq!(raster.height, 2);
        assert_eq!(raster.channels, 3);
        // The derived payload (600) exceeds what remains after the
        // header, so the whole buffer is taken verbatim: the first 12
        // samples are the header bytes themselves.
        assert_eq!(raster.samples.len(), 600);
        assert_eq!(raster.samples[..12], buf[..12]);
    }

    #[test]
    fn test_fallback_swaps_to_assumed_height_for_small_buffers() {
        // 150 bytes: derived height 150/300 = 0, so the assumption swaps
        // to height 100 and width 150/300 = 0.
        let mut buf = header(0, 0, 0);
        buf.resize(150, 0);

        let raster = decode(&buf).unwrap();
        assert_eq!(raster.width, 0);
        assert_eq!(raster.height, 100);
        assert_eq!(raster.channels, 3);
    }

    #[test]
    fn test_channels_above_four_engage_fallback() {
        let mut buf = header(10, 10, 5);
        buf.resize(912, 1);

        let raster = decode(&buf).unwrap();
        assert_eq!(raster.channels, 3);
        assert_eq!(raster.width, 100);
        assert_eq!(raster.height, 3); // 912 / 300
    }

    #[test]
    fn test_short_payload_keeps_declared_dimensions() {
        // Declares 4x4 RGB (48 bytes) but carries only 6.
        let mut buf = header(4, 4, 3);
        buf.extend_from_slice(&[1, 2, 3, 4, 5, 6]);

        let raster = decode(&buf).unwrap();
        assert_eq!(raster.width, 4);
        assert_eq!(raster.height, 4);
        // The whole buffer, header included, becomes the samples.
        assert_eq!(raster.samples.len(), 18);
        assert_eq!(raster.samples[..4], buf[..4]);
        assert!(!raster.is_complete());
    }

    #[test]
    fn test_huge_declared_payload_takes_short_path() {
        // i32::MAX on every axis declares a payload no buffer can hold;
        // the buffer is passed through verbatim with dimensions kept.
        let mut buf = header(i32::MAX, i32::MAX, 4);
        buf.resize(64, 3);

        let raster = decode(&buf).unwrap();
        assert_eq!(raster.width, i32::MAX as u32);
        assert_eq!(raster.samples.len(), 64);
    }
}
