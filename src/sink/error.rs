//! Output sink error types

use std::path::PathBuf;

/// Error type for clipboard writes
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    /// No usable clipboard on this platform or session (e.g. no display)
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),
    /// The clipboard exists but refused the write
    #[error("Clipboard access denied: {0}")]
    Denied(String),
}

impl From<arboard::Error> for ClipboardError {
    fn from(err: arboard::Error) -> Self {
        match err {
            arboard::Error::ClipboardOccupied => ClipboardError::Denied(err.to_string()),
            arboard::Error::ClipboardNotSupported => {
                ClipboardError::Unavailable(err.to_string())
            }
            other => ClipboardError::Unavailable(other.to_string()),
        }
    }
}

/// Error type for saving art to a file
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("Failed to write '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
