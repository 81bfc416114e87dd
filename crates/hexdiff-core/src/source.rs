//! Opening and positioning the input streams.

use crate::errors::{HexdiffError, Result};
use crate::window::ByteWindow;
use std::fs::File;
use std::io::{BufReader, Seek, SeekFrom};
use std::path::Path;

/// A file opened for comparison, positioned at its starting offset.
pub type FileWindow = ByteWindow<BufReader<File>>;

/// Open `path` and seek to `offset`.
///
/// The file is closed when the returned window is dropped.
///
/// # Errors
///
/// - `Open` if the file cannot be opened
/// - `Seek` if the offset cannot be honored
pub fn open_at(path: &Path, offset: u64) -> Result<FileWindow> {
    let name = path.display().to_string();

    let mut file = File::open(path).map_err(|source| HexdiffError::Open {
        path: name.clone(),
        source,
    })?;

    file.seek(SeekFrom::Start(offset))
        .map_err(|source| HexdiffError::Seek {
            path: name.clone(),
            offset,
            source,
        })?;

    tracing::debug!(path = %name, offset, "stream opened");
    Ok(ByteWindow::new(BufReader::new(file), name))
}
