//! Include resolution
//!
//! Each `includes:` entry is rendered, located, read, validated and merged
//! into the root Taskfile under its namespace. Included Taskfiles may not
//! include further Taskfiles or declare dotenv files.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::ReadError;
use super::loader::read_taskfile;
use super::locate::DEFAULT_ENTRYPOINT;
use super::paths;
use crate::domain::{merge, IncludedTaskfile, Taskfile};
use crate::template::Templater;

/// Merges every include of `root`, in namespace order
///
/// `dir` is the directory relative include paths are resolved against.
/// The root's `includes` are consumed; any failure aborts the whole merge.
pub fn merge_includes(root: &mut Taskfile, dir: &Path, templater: &Templater) -> Result<(), ReadError> {
    let mut includes: Vec<_> = std::mem::take(&mut root.includes).into_iter().collect();
    includes.sort_by(|(a, _), (b, _)| a.cmp(b));

    for (namespace, include) in includes {
        let include = render(&include, templater)?;
        let path = resolve_path(&include, dir)?;
        debug!(namespace = %namespace, path = %path.display(), "Including Taskfile");

        let mut included = read_taskfile(&path)?;

        if !included.includes.is_empty() {
            return Err(ReadError::IncludedTaskfileHasIncludes);
        }
        if !included.dotenv.is_empty() {
            return Err(ReadError::IncludedTaskfileHasDotenv);
        }

        if include.advanced_import {
            rebase_task_dirs(&mut included, Path::new(&include.dir));
        }

        merge(root, included, Some(namespace.as_str()))?;
    }

    Ok(())
}

/// Renders the include's path and base directory
fn render(include: &IncludedTaskfile, templater: &Templater) -> Result<IncludedTaskfile, ReadError> {
    Ok(IncludedTaskfile {
        taskfile: templater.replace(&include.taskfile)?,
        dir: templater.replace(&include.dir)?,
        advanced_import: include.advanced_import,
    })
}

/// Turns the include's path into the Taskfile to read
///
/// The path must exist; a directory means its `Taskfile.yml`.
fn resolve_path(include: &IncludedTaskfile, dir: &Path) -> Result<PathBuf, ReadError> {
    let path = paths::join(dir, Path::new(&include.taskfile));

    let metadata = fs::metadata(&path).map_err(|e| ReadError::io(&path, e))?;
    if metadata.is_dir() {
        return Ok(path.join(DEFAULT_ENTRYPOINT));
    }
    Ok(path)
}

/// Moves every task with a relative (or unset) `dir` under `base`
fn rebase_task_dirs(taskfile: &mut Taskfile, base: &Path) {
    for task in taskfile.tasks.values_mut() {
        let current = task.dir.take().unwrap_or_default();
        if current.is_absolute() {
            task.dir = Some(current);
            continue;
        }

        let rebased = paths::join(base, &current);
        task.dir = (!rebased.as_os_str().is_empty()).then_some(rebased);
    }
}
