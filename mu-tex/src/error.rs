//! Texture decoding error types

use thiserror::Error;

/// Errors produced while classifying or decoding a texture buffer.
#[derive(Debug, Error)]
pub enum TexError {
    /// Buffer is neither OZJ nor OZT
    #[error("unrecognized texture container")]
    UnsupportedContainer,

    /// Declared OZT dimensions exceed the available pixel data
    #[error("OZT pixel data truncated: {width}x{height} needs {expected} bytes, got {actual}")]
    Truncated {
        width: u16,
        height: u16,
        expected: usize,
        actual: usize,
    },

    /// The embedded or standalone image stream was rejected by the codec
    #[error("image decode failed: {0}")]
    Decode(#[from] image::ImageError),
}
