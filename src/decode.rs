//! Decoding raw file bytes into an RGBA bitmap.

use std::path::Path;

use image::RgbaImage;

use crate::error::ConvertError;

/// A decoded bitmap, ready to be sampled.
#[derive(Debug, Clone)]
pub struct SourceImage {
    pixels: RgbaImage,
}

impl SourceImage {
    /// Wrap an already-decoded RGBA buffer.
    pub fn from_rgba(pixels: RgbaImage) -> Self {
        Self { pixels }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    /// RGBA pixel data, 4 bytes per pixel, row-major.
    pub fn as_raw(&self) -> &[u8] {
        self.pixels.as_raw()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}

/// Decode an image from its file bytes.
///
/// The format is sniffed from the content, so the file name does not matter.
/// Empty input, unknown formats and truncated files all fail with
/// [`ConvertError::Decode`].
pub fn decode(bytes: &[u8]) -> Result<SourceImage, ConvertError> {
    let img = image::load_from_memory(bytes).map_err(ConvertError::Decode)?;
    let pixels = img.to_rgba8();
    log::debug!(
        "Decoded {} byte image to {}x{}",
        bytes.len(),
        pixels.width(),
        pixels.height()
    );
    Ok(SourceImage { pixels })
}

/// Read a file from disk and decode it.
pub fn decode_file<P: AsRef<Path>>(path: P) -> Result<SourceImage, ConvertError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| ConvertError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    decode(&bytes)
}
