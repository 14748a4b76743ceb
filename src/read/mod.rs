//! # Taskfile Reader
//!
//! Turns a directory into one fully merged [`Taskfile`].
//!
//! ## Pipeline
//!
//! | Step | Applies to | Module |
//! |------|------------|--------|
//! | Find the entrypoint, walking up | all | [`locate`] |
//! | Parse it | all | [`loader`] |
//! | Pick behaviour from `version` | all | [`SchemaBehavior`] |
//! | Overlay `dotenv` files onto `env` | v3+ | [`dotenv`] |
//! | Merge `includes` under namespaces | v3+ | [`include`] |
//! | Merge `Taskfile_<os>.yml` flatly | before v3 | [`legacy`] |
//! | Stamp task names | all | [`finalize`] |
//!
//! Every step either succeeds completely or aborts the whole read. The only
//! tolerated gaps are a missing dotenv file and a missing platform Taskfile.
//!
//! Relative dotenv and include paths, and the platform Taskfile, resolve
//! against the directory that holds the located Taskfile, not against the
//! directory the search started from.

pub mod dotenv;
pub mod finalize;
pub mod include;
pub mod legacy;
pub mod loader;
pub mod locate;
pub mod paths;

mod error;

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::domain::{SchemaBehavior, Taskfile};
use crate::template::Templater;

pub use error::ReadError;
pub use locate::{find_taskfile, DEFAULT_ENTRYPOINT};

/// Locates, reads and merges the Taskfile governing `dir`
pub fn taskfile(dir: impl AsRef<Path>, entrypoint: &str) -> Result<Taskfile, ReadError> {
    let path = find_taskfile(dir.as_ref(), entrypoint)?;
    read_resolved(&path)
}

/// Reads and merges the Taskfile at `path`, which must already exist
pub fn read_resolved(path: &Path) -> Result<Taskfile, ReadError> {
    let root_dir = taskfile_dir(path);
    let mut taskfile = loader::read_taskfile(path)?;

    let version = taskfile.schema_version()?;
    let behavior = SchemaBehavior::for_version(version);

    if behavior.reads_dotenv() {
        dotenv::apply_dotenv(&mut taskfile, &root_dir)?;
    } else if !taskfile.dotenv.is_empty() {
        warn!(%version, "Ignoring dotenv, which needs Taskfile version 3 or later");
    }

    if behavior.resolves_includes() {
        include::merge_includes(&mut taskfile, &root_dir, &Templater::new())?;
    } else if !taskfile.includes.is_empty() {
        warn!(%version, "Ignoring includes, which need Taskfile version 3 or later");
    }

    if behavior.merges_platform_taskfile() {
        legacy::merge_platform_taskfile(&mut taskfile, &root_dir)?;
    }

    finalize::finalize_tasks(&mut taskfile);

    info!(
        path = %path.display(),
        %version,
        tasks = taskfile.tasks.len(),
        "Resolved Taskfile"
    );
    Ok(taskfile)
}

fn taskfile_dir(path: &Path) -> PathBuf {
    path.parent().map(Path::to_path_buf).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn resolves_from_nested_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("q").join("r");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            dir.path().join("Taskfile.yml"),
            "version: '3'\ntasks:\n  hello: echo hello\n",
        )
        .unwrap();

        let tf = taskfile(&nested, DEFAULT_ENTRYPOINT).unwrap();

        assert_eq!(tf.tasks["hello"].name, "hello");
    }

    #[test]
    fn missing_version_is_rejected() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Taskfile.yml"), "tasks:\n  a: echo\n").unwrap();

        let err = taskfile(dir.path(), DEFAULT_ENTRYPOINT).unwrap_err();
        assert!(matches!(err, ReadError::Version(_)));
    }

    #[test]
    fn invalid_version_is_rejected() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Taskfile.yml"), "version: latest\n").unwrap();

        let err = taskfile(dir.path(), DEFAULT_ENTRYPOINT).unwrap_err();
        assert!(matches!(err, ReadError::Version(_)));
    }
}
