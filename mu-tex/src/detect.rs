//! Container classification for raw texture buffers

use crate::error::TexError;
use crate::{JPEG_SOI, OZJ_SCAN_END, OZJ_SCAN_START, OZT_DEPTH, OZT_HEADER_SIZE, OZT_MAX_DIM};

/// Recognized proprietary container layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container {
    /// OZJ: embedded JPEG stream starting at `jpeg_offset`
    Ozj { jpeg_offset: usize },
    /// OZT: raw BGRA pixels behind the fixed 22-byte header
    Ozt { width: u16, height: u16 },
}

/// Classify a raw buffer as OZJ or OZT by inspecting its header bytes.
///
/// OZJ is detected by the JPEG start-of-image marker somewhere in the
/// header tail (start offsets 20..=29); client versions pad the header
/// differently, hence the scan. OZT is detected by its fixed header:
/// little-endian dimensions at offsets 16/18, a depth byte at offset 20
/// that must read 32, and enough bytes after the header to hold every
/// declared pixel. Anything else is unsupported.
pub fn detect_container(data: &[u8]) -> Result<Container, TexError> {
    for offset in OZJ_SCAN_START..=OZJ_SCAN_END {
        if data.len() >= offset + JPEG_SOI.len() && data[offset..offset + JPEG_SOI.len()] == JPEG_SOI
        {
            return Ok(Container::Ozj {
                jpeg_offset: offset,
            });
        }
    }

    if data.len() >= OZT_HEADER_SIZE {
        let width = u16::from_le_bytes([data[16], data[17]]);
        let height = u16::from_le_bytes([data[18], data[19]]);
        let depth = data[20];
        let pixel_bytes = width as usize * height as usize * 4;

        if width > 0
            && height > 0
            && width <= OZT_MAX_DIM
            && height <= OZT_MAX_DIM
            && depth == OZT_DEPTH
            && OZT_HEADER_SIZE + pixel_bytes <= data.len()
        {
            return Ok(Container::Ozt { width, height });
        }
    }

    Err(TexError::UnsupportedContainer)
}
