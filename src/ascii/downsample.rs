//! Resampling a decoded image down to the character grid.

use image::imageops::{self, FilterType};
use image::RgbaImage;

use super::dimensions::sample_dimensions;
use crate::decode::SourceImage;
use crate::error::ConvertError;

/// The downsampled raster, one pixel per output character.
#[derive(Debug, Clone)]
pub struct SampleGrid {
    pixels: RgbaImage,
}

impl SampleGrid {
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// RGBA pixel data, 4 bytes per cell, row-major.
    pub fn as_raw(&self) -> &[u8] {
        self.pixels.as_raw()
    }

    /// Iterate over rows, top to bottom. Each row is `width * 4` bytes.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        let stride = self.pixels.width() as usize * 4;
        self.pixels.as_raw().chunks_exact(stride)
    }
}

/// Resize a source image to `target_width` columns.
///
/// The row count comes from [`sample_dimensions`]. Resampling uses a
/// bilinear (triangle) filter; an image that already has the target size
/// is copied as is.
pub fn resize(
    source: &SourceImage,
    target_width: u32,
    aspect_correction: f64,
) -> Result<SampleGrid, ConvertError> {
    let (width, height) = sample_dimensions(
        source.width(),
        source.height(),
        target_width,
        aspect_correction,
    )?;

    let pixels = if (width, height) == source.dimensions() {
        source.pixels().clone()
    } else {
        imageops::resize(source.pixels(), width, height, FilterType::Triangle)
    };

    log::debug!(
        "Resampled {}x{} to {}x{} grid",
        source.width(),
        source.height(),
        width,
        height
    );

    Ok(SampleGrid { pixels })
}
