//! OZT decoding (fixed 22-byte header + raw BGRA pixels)

use crate::OZT_HEADER_SIZE;
use crate::decode::Bitmap;
use crate::error::TexError;

/// Decode an OZT buffer with dimensions taken from detection.
///
/// The header is 16 reserved bytes, width and height as little-endian
/// 16-bit values, a depth byte, and one more reserved byte. Pixels follow
/// as one 4-byte quad each in B,G,R,A order. Quads are reordered to
/// R,G,B,A; stream row `y` becomes output row `y`. Some format write-ups
/// describe OZT rows as bottom-up, but game data decodes correctly
/// without a flip.
pub fn decode_ozt(data: &[u8], width: u16, height: u16) -> Result<Bitmap, TexError> {
    let pixel_count = width as usize * height as usize;
    let expected = OZT_HEADER_SIZE + pixel_count * 4;
    if data.len() < expected {
        return Err(TexError::Truncated {
            width,
            height,
            expected,
            actual: data.len(),
        });
    }

    let mut pixels = Vec::with_capacity(pixel_count * 4);
    for quad in data[OZT_HEADER_SIZE..expected].chunks_exact(4) {
        pixels.extend_from_slice(&[quad[2], quad[1], quad[0], quad[3]]);
    }

    Ok(Bitmap {
        width: width as u32,
        height: height as u32,
        pixels,
    })
}
