//! Dotenv overlay
//!
//! Values from dotenv files only fill gaps in `env`: explicit declarations
//! win, and earlier files win over later ones.

use std::fs;
use std::io;
use std::path::Path;

use indexmap::IndexMap;
use tracing::debug;

use super::error::ReadError;
use super::paths;
use crate::domain::{Taskfile, Var};

/// Overlays every declared dotenv file onto `taskfile.env`
pub fn apply_dotenv(taskfile: &mut Taskfile, dir: &Path) -> Result<(), ReadError> {
    for declared in &taskfile.dotenv {
        let path = paths::join(dir, Path::new(declared));

        let Some(values) = read_env_file(&path)? else {
            debug!(path = %path.display(), "Dotenv file not found, skipping");
            continue;
        };

        let mut added = 0;
        for (key, value) in values {
            if !taskfile.env.contains_key(&key) {
                taskfile.env.insert(key, Var::Static(value));
                added += 1;
            }
        }
        debug!(path = %path.display(), added, "Applied dotenv file");
    }

    Ok(())
}

/// Reads a dotenv file into a flat map; `None` when the file does not exist
///
/// A key repeated inside one file keeps its last value.
fn read_env_file(path: &Path) -> Result<Option<IndexMap<String, String>>, ReadError> {
    match fs::metadata(path) {
        Ok(_) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(ReadError::io(path, e)),
    }

    let dotenv_error = |source| ReadError::Dotenv {
        path: path.to_path_buf(),
        source,
    };

    let mut values = IndexMap::new();
    for item in dotenvy::from_path_iter(path).map_err(dotenv_error)? {
        let (key, value) = item.map_err(dotenv_error)?;
        values.insert(key, value);
    }

    Ok(Some(values))
}
