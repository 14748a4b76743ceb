//! Per-platform Taskfiles for schema versions before 3
//!
//! A `Taskfile_<platform>.yml` next to the root Taskfile is merged into it
//! without a namespace, replacing same-named tasks.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::ReadError;
use super::loader::read_taskfile;
use crate::domain::{merge, Taskfile};

/// Platform name as used in Taskfile names (`linux`, `darwin`, `windows`, ...)
pub fn platform() -> &'static str {
    match std::env::consts::OS {
        "macos" => "darwin",
        other => other,
    }
}

/// Path of the platform Taskfile for `dir`
pub fn platform_taskfile_path(dir: &Path) -> PathBuf {
    dir.join(format!("Taskfile_{}.yml", platform()))
}

/// Merges the platform Taskfile into `root` if one exists
pub fn merge_platform_taskfile(root: &mut Taskfile, dir: &Path) -> Result<(), ReadError> {
    let path = platform_taskfile_path(dir);

    match fs::metadata(&path) {
        Ok(_) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(ReadError::io(&path, e)),
    }

    debug!(path = %path.display(), "Merging platform Taskfile");
    let platform_taskfile = read_taskfile(&path)?;
    merge(root, platform_taskfile, None)?;
    Ok(())
}
