//! Output sinks for finished art: the clipboard and plain-text files.

mod clipboard;
mod error;
mod file;

pub use clipboard::{
    copy_to_clipboard, Clipboard, LazyClipboard, SystemClipboard, HOLDS_SELECTION,
};
pub use error::{ClipboardError, SaveError};
pub use file::{save_as_file, DEFAULT_FILENAME};

/// Message shown when an export is attempted before any conversion.
pub const NOTHING_TO_EXPORT: &str = "Convert an image first!";

/// Outcome of an export action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Export<T = ()> {
    /// The art was written to the sink
    Done(T),
    /// There was no art yet; the sink was not touched
    NothingToExport,
}
