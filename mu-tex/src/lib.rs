//! Mu-Tex: OZJ/OZT texture container parsers for MU Online assets
//!
//! MU Online wraps its textures in two thin proprietary containers:
//!
//! - **OZJ**: a fixed-size header followed by a plain JPEG stream
//! - **OZT**: a 22-byte header followed by raw BGRA pixel data
//!
//! This crate classifies a raw byte buffer, decodes either container to a
//! canonical RGBA [`Bitmap`], and falls back to the standard codecs for
//! ordinary image files. It also carries the texture-name normalization and
//! extension-equivalence rules used to match a mesh's requested texture
//! against the files actually shipped on disk (clients routinely store
//! `weapon01.ozj` next to models that ask for `weapon01.jpg`).
//!
//! # Usage
//!
//! ```ignore
//! use mu_tex::decode_texture;
//!
//! let data = std::fs::read("weapon01.ozj").unwrap();
//! let bitmap = decode_texture(&data, "ozj").unwrap();
//! println!("{}x{}", bitmap.width, bitmap.height);
//! ```

mod decode;
mod detect;
mod error;
mod name;
mod ozj;
mod ozt;

pub use decode::{Bitmap, decode_texture};
pub use detect::{Container, detect_container};
pub use error::TexError;
pub use name::{TEXTURE_EXTENSIONS, TextureName, extensions_match};
pub use ozj::decode_ozj;
pub use ozt::decode_ozt;

// =============================================================================
// Constants
// =============================================================================

/// JPEG start-of-image marker embedded behind the OZJ header
pub const JPEG_SOI: [u8; 3] = [0xFF, 0xD8, 0xFF];

/// First byte offset probed for the embedded JPEG marker
pub const OZJ_SCAN_START: usize = 20;

/// Last byte offset probed for the embedded JPEG marker (inclusive)
pub const OZJ_SCAN_END: usize = 29;

/// Size of the fixed OZT header in bytes
pub const OZT_HEADER_SIZE: usize = 22;

/// Largest width or height an OZT header may declare
pub const OZT_MAX_DIM: u16 = 1024;

/// The only bit depth OZT files ship with
pub const OZT_DEPTH: u8 = 32;
