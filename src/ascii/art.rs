//! Rendering a sample grid into text.

use std::fmt;

use super::charset::Palette;
use super::downsample::SampleGrid;
use super::grayscale::luminance;
use super::mapping::map_to_char;

/// Rendered ASCII art: one line per grid row, each ending in `\n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiArt {
    text: String,
    width: u32,
    height: u32,
}

impl AsciiArt {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// Characters per row.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Rows without their terminators.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }
}

impl fmt::Display for AsciiArt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Render a sample grid, row by row, left to right.
pub fn render(grid: &SampleGrid, palette: &Palette, invert: bool) -> AsciiArt {
    let width = grid.width();
    let height = grid.height();
    let mut text = String::with_capacity((width as usize + 1) * height as usize);

    for row in grid.rows() {
        for px in row.chunks_exact(4) {
            text.push(map_to_char(luminance(px[0], px[1], px[2]), palette, invert));
        }
        text.push('\n');
    }

    AsciiArt {
        text,
        width,
        height,
    }
}
