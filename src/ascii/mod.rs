//! ASCII renderer module for converting decoded images to ASCII art.
//!
//! The pipeline:
//!
//! 1. **Downsampling** - Resize to a fixed-width character grid
//! 2. **Luminance** - RGB to brightness using BT.601
//! 3. **Character mapping** - Map brightness onto a [`Palette`]
//! 4. **Rendering** - Join characters into newline-terminated rows
//!
//! # Character Sets
//!
//! Presets are available via [`CharSet`]:
//! - `Standard` - 10-level ASCII density ramp
//! - `Blocks` - Unicode block characters
//! - `Minimal` - 4-level clean look

mod art;
mod charset;
mod dimensions;
mod downsample;
mod grayscale;
mod mapping;

pub use art::{render, AsciiArt};
pub use charset::{CharSet, Palette, BLOCKS_CHARSET, MINIMAL_CHARSET, STANDARD_CHARSET};
pub use dimensions::{
    sample_dimensions, DEFAULT_ASPECT_CORRECTION, DEFAULT_WIDTH, MAX_SAMPLE_CELLS,
};
pub use downsample::{resize, SampleGrid};
pub use grayscale::{luminance, to_grayscale};
pub use mapping::{char_index, map_to_char, map_to_chars};
