//! `init`: write a starter Taskfile

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::read::DEFAULT_ENTRYPOINT;

const DEFAULT_TASKFILE: &str = r#"# https://taskfile.dev

version: '3'

vars:
  GREETING: Hello, World!

tasks:
  default:
    cmds:
      - echo "{{.GREETING}}"
    silent: true
"#;

/// Writes `Taskfile.yml` into `dir`, refusing to overwrite an existing one
pub fn init_taskfile(dir: &Path) -> Result<PathBuf> {
    let path = dir.join(DEFAULT_ENTRYPOINT);
    if path.exists() {
        anyhow::bail!("{} already exists", path.display());
    }

    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    fs::write(&path, DEFAULT_TASKFILE)
        .with_context(|| format!("Failed to write Taskfile: {}", path.display()))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::read;
    use tempfile::TempDir;

    #[test]
    fn init_writes_a_readable_taskfile() {
        let dir = TempDir::new().unwrap();

        let path = init_taskfile(dir.path()).unwrap();
        assert!(path.is_file());

        let tf = read::taskfile(dir.path(), DEFAULT_ENTRYPOINT).unwrap();
        assert_eq!(tf.tasks["default"].name, "default");
        assert!(tf.tasks["default"].silent);
    }

    #[test]
    fn init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(DEFAULT_ENTRYPOINT), "version: '3'\n").unwrap();

        assert!(init_taskfile(dir.path()).is_err());
        assert_eq!(
            fs::read_to_string(dir.path().join(DEFAULT_ENTRYPOINT)).unwrap(),
            "version: '3'\n"
        );
    }

    #[test]
    fn init_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("new").join("project");

        init_taskfile(&target).unwrap();
        assert!(target.join(DEFAULT_ENTRYPOINT).is_file());
    }
}
