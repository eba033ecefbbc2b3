//! Sample grid dimension calculation.

use crate::error::ConvertError;

/// Default output width in characters.
pub const DEFAULT_WIDTH: u32 = 100;

/// Default height-correction multiplier.
/// Text characters are roughly twice as tall as they are wide, so the grid
/// gets about half as many rows as a square-pixel resize would.
pub const DEFAULT_ASPECT_CORRECTION: f64 = 0.5;

/// Largest sample grid, in cells, that a conversion will allocate.
pub const MAX_SAMPLE_CELLS: u64 = 1 << 24;

/// Calculate the sample grid size for an image.
///
/// The width is fixed at `target_width`; the height follows the image's
/// proportions scaled by `aspect_correction`:
///
/// `height = floor(img_height / img_width * target_width * aspect_correction)`
///
/// A computed height of 0 (very wide images) is clamped to 1.
/// Grids over [`MAX_SAMPLE_CELLS`] are refused before anything is allocated.
///
/// # Errors
/// * [`ConvertError::InvalidImage`] if either image dimension is 0
/// * [`ConvertError::InvalidOptions`] if `target_width` is 0,
///   `aspect_correction` is not a positive finite number, or the grid
///   would exceed [`MAX_SAMPLE_CELLS`]
///
/// # Example
/// ```ignore
/// // 640x480 at 100 columns: floor(0.75 * 100 * 0.5) = 37 rows
/// assert_eq!(sample_dimensions(640, 480, 100, 0.5)?, (100, 37));
/// ```
pub fn sample_dimensions(
    img_width: u32,
    img_height: u32,
    target_width: u32,
    aspect_correction: f64,
) -> Result<(u32, u32), ConvertError> {
    if img_width == 0 || img_height == 0 {
        return Err(ConvertError::InvalidImage {
            width: img_width,
            height: img_height,
        });
    }
    if target_width == 0 {
        return Err(ConvertError::InvalidOptions(
            "width must be at least 1".to_string(),
        ));
    }
    if !aspect_correction.is_finite() || aspect_correction <= 0.0 {
        return Err(ConvertError::InvalidOptions(format!(
            "aspect correction must be a positive number, got {}",
            aspect_correction
        )));
    }

    let ratio = f64::from(img_height) / f64::from(img_width);
    let height = (ratio * f64::from(target_width) * aspect_correction).floor();
    let height = height.max(1.0);
    if f64::from(target_width) * height > MAX_SAMPLE_CELLS as f64 {
        return Err(ConvertError::InvalidOptions(format!(
            "a {}x{} character grid is too large (limit {} cells); \
             lower the width or aspect correction",
            target_width, height, MAX_SAMPLE_CELLS
        )));
    }

    Ok((target_width, height as u32))
}
