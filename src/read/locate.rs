//! Entrypoint discovery
//!
//! Walks from a directory up to the filesystem root looking for the
//! entrypoint file, the same way `git` finds its repository.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::ReadError;
use super::paths;

/// Conventional entrypoint name
pub const DEFAULT_ENTRYPOINT: &str = "Taskfile.yml";

/// Returns the nearest `<ancestor>/<entrypoint>`, starting at `dir` itself
///
/// The existence check is a plain `stat`, so a broken symlink counts as
/// absent. On failure the reported path is the one probed in `dir`.
pub fn find_taskfile(dir: &Path, entrypoint: &str) -> Result<PathBuf, ReadError> {
    let start = paths::absolute(dir).map_err(|e| ReadError::io(dir, e))?;
    let anchor = start.join(entrypoint);

    let mut current = start;
    loop {
        let candidate = current.join(entrypoint);
        debug!(path = %candidate.display(), "Probing for Taskfile");

        if fs::metadata(&candidate).is_ok() {
            return Ok(candidate);
        }

        if !current.pop() {
            return Err(ReadError::NotFound { path: anchor });
        }
    }
}
