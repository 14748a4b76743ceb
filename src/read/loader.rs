use std::fs;
use std::path::Path;

use tracing::debug;

use super::error::ReadError;
use crate::domain::Taskfile;

/// Reads and parses a single Taskfile
///
/// The file is read to completion and closed before parsing starts.
pub fn read_taskfile(path: &Path) -> Result<Taskfile, ReadError> {
    let content = fs::read_to_string(path).map_err(|e| ReadError::io(path, e))?;

    let taskfile = serde_yaml::from_str(&content).map_err(|source| ReadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), "Read Taskfile");
    Ok(taskfile)
}
