//! RGB to luminance conversion using the ITU-R BT.601 formula.

/// Luminance of a single RGB pixel.
///
/// The formula is: Y = 0.299*R + 0.587*G + 0.114*B
///
/// Weights are applied as integers scaled by 1000 and divided once, so the
/// result is exact at the ends of the range: white is exactly 255.0 and
/// black exactly 0.0.
pub fn luminance(r: u8, g: u8, b: u8) -> f64 {
    // 299 + 587 + 114 = 1000
    let weighted = 299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b);
    f64::from(weighted) / 1000.0
}

/// Luminance of every pixel in an RGBA buffer (4 bytes per pixel).
///
/// Alpha is ignored.
pub fn to_grayscale(rgba: &[u8]) -> Vec<f64> {
    rgba.chunks_exact(4)
        .map(|px| luminance(px[0], px[1], px[2]))
        .collect()
}
