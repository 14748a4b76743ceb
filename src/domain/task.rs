//! Task domain model
//!
//! A task is a named unit of work. Its execution fields are carried through
//! untouched; only `name` and `dir` are ever written by the reader.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::vars::Vars;

/// A single command in a task's `cmds` list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cmd {
    /// `- echo hello`
    Shell(String),
    /// `- task: other` with optional variables
    Task {
        task: String,
        #[serde(default, skip_serializing_if = "Vars::is_empty")]
        vars: Vars,
    },
    /// `- cmd: echo hello` with per-command flags
    Command {
        cmd: String,
        #[serde(default, skip_serializing_if = "is_false")]
        silent: bool,
        #[serde(default, skip_serializing_if = "is_false")]
        ignore_error: bool,
    },
}

/// A dependency in a task's `deps` list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dep {
    /// `- build`
    Name(String),
    /// `- task: build` with optional variables
    Call {
        task: String,
        #[serde(default, skip_serializing_if = "Vars::is_empty")]
        vars: Vars,
    },
}

/// A task definition
///
/// In YAML a task can be written three ways:
///
/// ```yaml
/// tasks:
///   one: echo one              # a single command
///   two: [echo a, echo b]      # a list of commands
///   three:                     # a full definition
///     desc: Third task
///     cmds: [echo three]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TaskSyntax")]
pub struct Task {
    /// The task's own key in the Taskfile, set once resolution finishes
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cmds: Vec<Cmd>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub deps: Vec<Dep>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub generates: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub status: Vec<String>,

    /// Working directory override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,

    #[serde(skip_serializing_if = "Vars::is_empty")]
    pub vars: Vars,

    #[serde(skip_serializing_if = "Vars::is_empty")]
    pub env: Vars,

    #[serde(skip_serializing_if = "is_false")]
    pub silent: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    #[serde(skip_serializing_if = "is_false")]
    pub ignore_error: bool,
}

/// The accepted YAML shapes of a task
#[derive(Deserialize)]
#[serde(untagged)]
enum TaskSyntax {
    Command(String),
    Commands(Vec<Cmd>),
    Full(Box<TaskBody>),
}

/// The full mapping form; `name` is never read from YAML
#[derive(Deserialize, Default)]
#[serde(default)]
struct TaskBody {
    desc: Option<String>,
    summary: Option<String>,
    cmds: Vec<Cmd>,
    deps: Vec<Dep>,
    sources: Vec<String>,
    generates: Vec<String>,
    status: Vec<String>,
    dir: Option<PathBuf>,
    vars: Vars,
    env: Vars,
    silent: bool,
    method: Option<String>,
    prefix: Option<String>,
    ignore_error: bool,
}

impl From<TaskSyntax> for Task {
    fn from(syntax: TaskSyntax) -> Self {
        match syntax {
            TaskSyntax::Command(cmd) => Task {
                cmds: vec![Cmd::Shell(cmd)],
                ..Task::default()
            },
            TaskSyntax::Commands(cmds) => Task {
                cmds,
                ..Task::default()
            },
            TaskSyntax::Full(body) => {
                let body = *body;
                Task {
                    name: String::new(),
                    desc: body.desc,
                    summary: body.summary,
                    cmds: body.cmds,
                    deps: body.deps,
                    sources: body.sources,
                    generates: body.generates,
                    status: body.status,
                    dir: body.dir,
                    vars: body.vars,
                    env: body.env,
                    silent: body.silent,
                    method: body.method,
                    prefix: body.prefix,
                    ignore_error: body.ignore_error,
                }
            }
        }
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}
