//! The full bytes-to-text conversion.
//!
//! Everything here is a pure transform: no clipboard, no files written, no
//! shared state. Converting the same input twice gives the same output.

use std::path::Path;

use crate::ascii::{
    render, resize, AsciiArt, Palette, DEFAULT_ASPECT_CORRECTION, DEFAULT_WIDTH, MAX_SAMPLE_CELLS,
};
use crate::decode::{decode, decode_file, SourceImage};
use crate::error::ConvertError;

/// Tunables for a conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertOptions {
    /// Sample grid width in characters
    pub width: u32,
    /// Height-scaling multiplier applied on top of the image aspect ratio
    pub aspect_correction: f64,
    /// Character ramp, darkest first
    pub palette: Palette,
    /// Flip brightness before mapping (for light backgrounds)
    pub invert: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            aspect_correction: DEFAULT_ASPECT_CORRECTION,
            palette: Palette::default(),
            invert: false,
        }
    }
}

impl ConvertOptions {
    /// Check the options without touching any image.
    pub fn validate(&self) -> Result<(), ConvertError> {
        if self.width == 0 {
            return Err(ConvertError::InvalidOptions(
                "width must be at least 1".to_string(),
            ));
        }
        if u64::from(self.width) > MAX_SAMPLE_CELLS {
            return Err(ConvertError::InvalidOptions(format!(
                "width must be at most {}, got {}",
                MAX_SAMPLE_CELLS, self.width
            )));
        }
        if !self.aspect_correction.is_finite() || self.aspect_correction <= 0.0 {
            return Err(ConvertError::InvalidOptions(format!(
                "aspect correction must be a positive number, got {}",
                self.aspect_correction
            )));
        }
        Ok(())
    }
}

/// Convert image file bytes to ASCII art.
pub fn convert(bytes: &[u8], options: &ConvertOptions) -> Result<AsciiArt, ConvertError> {
    options.validate()?;
    let source = decode(bytes)?;
    convert_image(&source, options)
}

/// Convert an image file on disk to ASCII art.
pub fn convert_file<P: AsRef<Path>>(
    path: P,
    options: &ConvertOptions,
) -> Result<AsciiArt, ConvertError> {
    options.validate()?;
    let path = path.as_ref();
    log::info!("Converting {}", path.display());
    let source = decode_file(path)?;
    convert_image(&source, options)
}

/// Convert an already-decoded image.
pub fn convert_image(
    source: &SourceImage,
    options: &ConvertOptions,
) -> Result<AsciiArt, ConvertError> {
    let grid = resize(source, options.width, options.aspect_correction)?;
    let art = render(&grid, &options.palette, options.invert);
    log::debug!("Rendered {}x{} characters", art.width(), art.height());
    Ok(art)
}
