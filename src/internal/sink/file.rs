// src/internal/sink/file.rs

use std::fs::{self, OpenOptions};
use std::path::Path;

use super::{Sink, SinkError, SinkKind};

impl Sink {
    /// Open `path` as a sink, creating parent directories as needed.
    ///
    /// Without `append` any existing file is truncated.
    pub fn file(path: impl AsRef<Path>, append: bool) -> Result<Self, SinkError> {
        let path = path.as_ref();
        let file = create_log_file(path, append)?;
        Ok(Sink::with_kind(SinkKind::File(path.to_path_buf()), file))
    }
}

/// Create or open a log file.
fn create_log_file(path: &Path, append: bool) -> Result<fs::File, SinkError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| SinkError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    OpenOptions::new()
        .create(true)
        .write(true)
        .append(append)
        .truncate(!append)
        .open(path)
        .map_err(|source| SinkError::Open {
            path: path.to_path_buf(),
            source,
        })
}
