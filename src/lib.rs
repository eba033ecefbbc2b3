//! asciify library crate.
//!
//! Converts images to ASCII art: [`convert`] for the pure transform,
//! [`session`] and [`sink`] for holding and exporting the result.

pub mod ascii;
pub mod cli;
pub mod config;
pub mod convert;
pub mod decode;
pub mod error;
pub mod interactive;
pub mod session;
pub mod sink;

pub use ascii::{AsciiArt, CharSet, Palette};
pub use convert::{convert, convert_file, convert_image, ConvertOptions};
pub use error::{ConvertError, Error};
