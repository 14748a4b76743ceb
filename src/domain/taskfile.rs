//! Taskfile document model

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use super::task::Task;
use super::vars::Vars;
use super::version::{SchemaVersion, VersionError};

/// Ordered mapping of task name to task
pub type Tasks = IndexMap<String, Task>;

/// A parsed Taskfile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Taskfile {
    /// Declared schema version, as written
    #[serde(
        deserialize_with = "deserialize_version",
        skip_serializing_if = "Option::is_none"
    )]
    pub version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expansions: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub silent: bool,

    /// Namespace to included Taskfile; emptied once includes are merged
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub includes: IndexMap<String, IncludedTaskfile>,

    #[serde(skip_serializing_if = "Vars::is_empty")]
    pub vars: Vars,

    #[serde(skip_serializing_if = "Vars::is_empty")]
    pub env: Vars,

    /// Dotenv files, in precedence order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dotenv: Vec<String>,

    #[serde(deserialize_with = "deserialize_tasks")]
    pub tasks: Tasks,
}

impl Taskfile {
    /// Parses the declared version
    pub fn schema_version(&self) -> Result<SchemaVersion, VersionError> {
        match self.version.as_deref() {
            Some(raw) => SchemaVersion::parse(raw),
            None => Err(VersionError::Missing),
        }
    }

    /// Returns the names of all tasks, in declaration order
    pub fn task_names(&self) -> impl Iterator<Item = &str> {
        self.tasks.keys().map(String::as_str)
    }
}

/// A reference to another Taskfile under `includes:`
///
/// ```yaml
/// includes:
///   docs: ./docs                  # simple form
///   lib:                          # advanced form
///     taskfile: ./lib/Tasks.yml
///     dir: ./lib
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "IncludeSyntax")]
pub struct IncludedTaskfile {
    /// Path to a Taskfile or a directory containing one
    pub taskfile: String,
    /// Base directory for the included tasks (advanced form only)
    #[serde(skip_serializing_if = "String::is_empty")]
    pub dir: String,
    #[serde(skip)]
    pub advanced_import: bool,
}

impl IncludedTaskfile {
    /// Creates a simple include
    pub fn simple(taskfile: impl Into<String>) -> Self {
        Self {
            taskfile: taskfile.into(),
            dir: String::new(),
            advanced_import: false,
        }
    }

    /// Creates an advanced include with a base directory
    pub fn advanced(taskfile: impl Into<String>, dir: impl Into<String>) -> Self {
        Self {
            taskfile: taskfile.into(),
            dir: dir.into(),
            advanced_import: true,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IncludeSyntax {
    Simple(String),
    Advanced {
        taskfile: String,
        #[serde(default)]
        dir: String,
    },
}

impl From<IncludeSyntax> for IncludedTaskfile {
    fn from(syntax: IncludeSyntax) -> Self {
        match syntax {
            IncludeSyntax::Simple(taskfile) => IncludedTaskfile::simple(taskfile),
            IncludeSyntax::Advanced { taskfile, dir } => IncludedTaskfile::advanced(taskfile, dir),
        }
    }
}

/// Accepts `version: '3'`, `version: 3` and `version: 2.6`
fn deserialize_version<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    use serde_yaml::Value;

    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(_) => Err(D::Error::custom("version must be a string or a number")),
    }
}

/// A task key with no body (`clean:`) is read as `None` and becomes an empty task
fn deserialize_tasks<'de, D>(deserializer: D) -> Result<Tasks, D::Error>
where
    D: Deserializer<'de>,
{
    let declared = IndexMap::<String, Option<Task>>::deserialize(deserializer)?;

    Ok(declared
        .into_iter()
        .map(|(name, task)| (name, task.unwrap_or_default()))
        .collect())
}
