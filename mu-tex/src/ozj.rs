//! OZJ decoding (fixed header + embedded JPEG stream)

use image::ImageFormat;

use crate::decode::Bitmap;
use crate::error::TexError;

/// Decode an OZJ buffer given the embedded stream offset from detection.
///
/// Everything before `jpeg_offset` is header and carries no pixel data.
/// Byte 17 of the header holds an orientation flag that shipped clients
/// never act on; the JPEG is returned in its natural orientation.
pub fn decode_ozj(data: &[u8], jpeg_offset: usize) -> Result<Bitmap, TexError> {
    let stream = data
        .get(jpeg_offset..)
        .ok_or(TexError::UnsupportedContainer)?;
    let img = image::load_from_memory_with_format(stream, ImageFormat::Jpeg)?;
    Ok(Bitmap::from_rgba(img.to_rgba8()))
}
