//! Decode dispatch and the canonical bitmap type

use image::ImageFormat;

use crate::detect::{Container, detect_container};
use crate::error::TexError;
use crate::ozj::decode_ozj;
use crate::ozt::decode_ozt;

/// An uncompressed RGBA8 image.
///
/// `pixels` holds `width * height * 4` bytes, R,G,B,A per pixel,
/// row-major with the first row at the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl Bitmap {
    pub(crate) fn from_rgba(image: image::RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            width,
            height,
            pixels: image.into_raw(),
        }
    }
}

/// Decode any supported texture buffer to RGBA8.
///
/// Proprietary containers are tried first. A buffer that is neither OZJ
/// nor OZT is handed to the standard codecs, picking the decoder from
/// `ext` when it names a known format (TGA in particular has no magic
/// bytes to sniff); this is the path plain image files take.
pub fn decode_texture(data: &[u8], ext: &str) -> Result<Bitmap, TexError> {
    match detect_container(data) {
        Ok(Container::Ozj { jpeg_offset }) => decode_ozj(data, jpeg_offset),
        Ok(Container::Ozt { width, height }) => decode_ozt(data, width, height),
        Err(TexError::UnsupportedContainer) => decode_standard(data, ext),
        Err(err) => Err(err),
    }
}

fn decode_standard(data: &[u8], ext: &str) -> Result<Bitmap, TexError> {
    let img = match ImageFormat::from_extension(ext) {
        Some(format) => image::load_from_memory_with_format(data, format)?,
        None => image::load_from_memory(data)?,
    };
    Ok(Bitmap::from_rgba(img.to_rgba8()))
}
