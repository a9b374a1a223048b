//! Container encoding.

use crate::raster::Raster;

use super::decode::HEADER_LEN;

/// Serialize a raster into the fixed container format.
///
/// Writes the 12-byte big-endian header (width, height, channels)
/// followed by the sample buffer as-is. The encoder performs no
/// validation: an incomplete raster produces a container whose payload
/// disagrees with its header, exactly as the raster disagreed.
pub fn encode(img: &Raster) -> Vec<u8> {
    let mut out = Vec::with_capacity(HEADER_LEN + img.samples.len());
    out.extend_from_slice(&(img.width as i32).to_be_bytes());
    out.extend_from_slice(&(img.height as i32).to_be_bytes());
    out.extend_from_slice(&(img.channels as i32).to_be_bytes());
    out.extend_from_slice(&img.samples);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::decode::decode;

    #[test]
    fn test_header_layout() {
        let img = Raster::new(2, 3, 1, vec![0; 6]);
        let buf = encode(&img);

        assert_eq!(buf.len(), HEADER_LEN + 6);
        assert_eq!(&buf[0..4], &[0, 0, 0, 2]);
        assert_eq!(&buf[4..8], &[0, 0, 0, 3]);
        assert_eq!(&buf[8..12], &[0, 0, 0, 1]);
    }

    #[test]
    fn test_decode_inverts_encode() {
        let img = Raster::new(3, 2, 4, (0..24).collect());
        let decoded = decode(&encode(&img)).unwrap();
        assert_eq!(decoded, img);
    }

    #[test]
    fn test_decode_inverts_encode_for_gray() {
        let img = Raster::new(5, 1, 1, vec![9, 8, 7, 6, 5]);
        assert_eq!(decode(&encode(&img)).unwrap(), img);
    }
}
