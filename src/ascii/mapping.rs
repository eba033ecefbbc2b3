//! Brightness to character mapping.

use super::charset::Palette;

/// Palette index for a brightness value.
///
/// `index = floor(brightness / 255 * (levels - 1))`, clamped to
/// `[0, levels - 1]`. Negative and NaN brightness map to 0, anything above
/// 255 maps to the last level.
pub fn char_index(brightness: f64, levels: usize) -> usize {
    if levels < 2 || brightness.is_nan() || brightness <= 0.0 {
        return 0;
    }
    let max = levels - 1;
    let idx = ((brightness / 255.0) * max as f64).floor();
    // float -> usize casts saturate, so infinities land on `max` too
    (idx as usize).min(max)
}

/// Map one brightness value (0-255) to a palette character.
///
/// If `invert` is set, brightness is flipped first (for light backgrounds).
pub fn map_to_char(brightness: f64, palette: &Palette, invert: bool) -> char {
    let brightness = if invert {
        255.0 - brightness.clamp(0.0, 255.0)
    } else {
        brightness
    };
    palette.get(char_index(brightness, palette.levels()))
}

/// Map brightness values to characters, one per input value.
///
/// # Example
/// ```ignore
/// let chars = map_to_chars(&[0.0, 127.0, 255.0], &Palette::default(), false);
/// // chars[0] = ' ' (darkest)
/// // chars[1] = '=' (mid)
/// // chars[2] = '@' (brightest)
/// ```
pub fn map_to_chars(brightness: &[f64], palette: &Palette, invert: bool) -> Vec<char> {
    brightness
        .iter()
        .map(|&b| map_to_char(b, palette, invert))
        .collect()
}
