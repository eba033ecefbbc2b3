//! Error types for image conversion and the command-line surface.

use std::path::PathBuf;

use crate::config::ConfigError;
use crate::sink::{ClipboardError, SaveError};

/// Errors that can occur while turning image bytes into ASCII art.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The bytes are empty, corrupt, or in a format we cannot decode.
    #[error("Failed to decode image: {0}")]
    Decode(#[source] image::ImageError),

    /// The image decoded, but has a degenerate size.
    #[error("Invalid image dimensions {width}x{height}")]
    InvalidImage { width: u32, height: u32 },

    #[error("Palette needs at least 2 characters, got {len}")]
    InvalidPalette { len: usize },

    #[error("Invalid conversion options: {0}")]
    InvalidOptions(String),

    #[error("Failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Top-level error for CLI commands.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Convert(#[from] ConvertError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    #[error(transparent)]
    Save(#[from] SaveError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
