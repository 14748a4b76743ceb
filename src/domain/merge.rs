//! Taskfile merging
//!
//! Folds one Taskfile into another. A namespaced merge prefixes every
//! incoming task name and refuses to overwrite an existing task; a flat
//! merge replaces same-named tasks.

use thiserror::Error;

use super::taskfile::Taskfile;

/// Separator between a namespace and a task name (`docs:build`)
pub const NAMESPACE_SEPARATOR: &str = ":";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MergeError {
    #[error("Taskfile versions should match. First is \"{first}\" but second is \"{second}\"")]
    VersionMismatch { first: String, second: String },

    #[error("Task \"{0}\" is already defined")]
    TaskCollision(String),
}

/// Returns `namespace:name`, or `name` when there is no namespace
pub fn task_name_with_namespace(name: &str, namespace: Option<&str>) -> String {
    match namespace {
        Some(ns) => format!("{ns}{NAMESPACE_SEPARATOR}{name}"),
        None => name.to_string(),
    }
}

/// Merges `source` into `dest`
///
/// - Both Taskfiles must declare the same schema version
/// - `expansions` and `output` are taken from `source` when it sets them
/// - `vars` and `env` entries from `source` replace those in `dest`
/// - tasks are inserted under `namespace:name` when a namespace is given
pub fn merge(dest: &mut Taskfile, source: Taskfile, namespace: Option<&str>) -> Result<(), MergeError> {
    let same_version = match (dest.schema_version(), source.schema_version()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    };
    if !same_version {
        return Err(MergeError::VersionMismatch {
            first: dest.version.clone().unwrap_or_default(),
            second: source.version.clone().unwrap_or_default(),
        });
    }

    if namespace.is_some() {
        if let Some(name) = source
            .tasks
            .keys()
            .map(|name| task_name_with_namespace(name, namespace))
            .find(|name| dest.tasks.contains_key(name))
        {
            return Err(MergeError::TaskCollision(name));
        }
    }

    if source.expansions.is_some() {
        dest.expansions = source.expansions;
    }
    if source.output.is_some() {
        dest.output = source.output;
    }

    dest.includes.extend(source.includes);
    dest.vars.extend(source.vars);
    dest.env.extend(source.env);

    for (name, task) in source.tasks {
        dest.tasks.insert(task_name_with_namespace(&name, namespace), task);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Cmd, Var};

    fn taskfile(yaml: &str) -> Taskfile {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn namespaced_merge_prefixes_tasks() {
        let mut root = taskfile("version: '3'\ntasks:\n  build: go build");
        let docs = taskfile("version: '3'\ntasks:\n  build: mkdocs build\n  serve: mkdocs serve");

        merge(&mut root, docs, Some("docs")).unwrap();

        let names: Vec<_> = root.task_names().collect();
        assert_eq!(names, vec!["build", "docs:build", "docs:serve"]);
        assert_eq!(root.tasks["build"].cmds, vec![Cmd::Shell("go build".to_string())]);
    }

    #[test]
    fn flat_merge_replaces_tasks() {
        let mut root = taskfile("version: '2'\ntasks:\n  build: make");
        let linux = taskfile("version: '2'\ntasks:\n  build: make linux\n  install: make install");

        merge(&mut root, linux, None).unwrap();

        assert_eq!(root.tasks.len(), 2);
        assert_eq!(
            root.tasks["build"].cmds,
            vec![Cmd::Shell("make linux".to_string())]
        );
    }

    #[test]
    fn namespaced_collision_is_rejected() {
        let mut root = taskfile("version: '3'\ntasks:\n  'docs:build': echo root");
        let docs = taskfile("version: '3'\ntasks:\n  build: mkdocs build");

        let err = merge(&mut root, docs, Some("docs")).unwrap_err();

        assert_eq!(err, MergeError::TaskCollision("docs:build".to_string()));
        assert_eq!(root.tasks["docs:build"].cmds.len(), 1);
    }

    #[test]
    fn versions_must_match() {
        let mut root = taskfile("version: '3'");
        let other = taskfile("version: '2'");

        let err = merge(&mut root, other, Some("x")).unwrap_err();
        assert_eq!(
            err,
            MergeError::VersionMismatch {
                first: "3".to_string(),
                second: "2".to_string()
            }
        );
    }

    #[test]
    fn equal_versions_in_different_spelling_merge() {
        let mut root = taskfile("version: '3'");
        let other = taskfile("version: 3.0\ntasks:\n  a: echo a");

        merge(&mut root, other, Some("x")).unwrap();
        assert!(root.tasks.contains_key("x:a"));
    }

    #[test]
    fn source_vars_and_output_win() {
        let mut root = taskfile("version: '3'\nvars:\n  A: root\n  B: root\nenv:\n  E: root");
        let other = taskfile("version: '3'\noutput: prefixed\nvars:\n  B: other\nenv:\n  E: other");

        merge(&mut root, other, Some("x")).unwrap();

        assert_eq!(root.vars["A"], Var::new_static("root"));
        assert_eq!(root.vars["B"], Var::new_static("other"));
        assert_eq!(root.env["E"], Var::new_static("other"));
        assert_eq!(root.output.as_deref(), Some("prefixed"));
    }

    #[test]
    fn task_name_helper() {
        assert_eq!(task_name_with_namespace("build", Some("docs")), "docs:build");
        assert_eq!(task_name_with_namespace("build", None), "build");
    }
}
