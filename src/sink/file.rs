//! Plain-text file output.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use super::error::SaveError;

/// File name used when the caller does not pick one.
pub const DEFAULT_FILENAME: &str = "ascii_art.txt";

/// Write `text` to `path` exactly as given.
///
/// The text goes to a temporary file next to `path` first and is renamed
/// into place once fully written. On any failure the temporary file is
/// removed and `path` is left untouched.
///
/// Returns the path written.
pub fn save_as_file(text: &str, path: &Path) -> Result<PathBuf, SaveError> {
    let io_err = |source| SaveError::Io {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
    tmp.write_all(text.as_bytes()).map_err(io_err)?;
    tmp.flush().map_err(io_err)?;
    // the returned PersistError owns the temp file and deletes it on drop
    tmp.persist(path).map_err(|e| io_err(e.error))?;

    log::info!("Saved {} bytes to {}", text.len(), path.display());
    Ok(path.to_path_buf())
}
