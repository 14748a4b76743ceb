//! Lexical path helpers
//!
//! Nothing here touches the filesystem.

use std::io;
use std::path::{Component, Path, PathBuf};

/// Makes `path` absolute against the current directory and cleans it
pub fn absolute(path: &Path) -> io::Result<PathBuf> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };
    Ok(clean(&joined))
}

/// Joins `rel` onto `base` and cleans the result; an absolute `rel` wins
pub fn join(base: &Path, rel: &Path) -> PathBuf {
    if rel.as_os_str().is_empty() {
        return clean(base);
    }
    clean(&base.join(rel))
}

/// Resolves `.` and `..` components without consulting the filesystem
pub fn clean(path: &Path) -> PathBuf {
    let mut components: Vec<Component> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match components.last() {
                Some(Component::Normal(_)) => {
                    components.pop();
                }
                // `/..` is `/`
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => components.push(component),
            },
            other => components.push(other),
        }
    }

    if components.is_empty() {
        return PathBuf::new();
    }
    components.iter().collect()
}
