//! Commands that read the resolved Taskfile (locate, list, show, dump)

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

use super::output::Output;
use crate::domain::Taskfile;
use crate::read;

/// Where to look for the Taskfile
pub struct Lookup<'a> {
    pub dir: &'a Path,
    pub entrypoint: &'a str,
}

impl Lookup<'_> {
    fn resolve(&self) -> Result<Taskfile> {
        read::taskfile(self.dir, self.entrypoint).with_context(|| {
            format!(
                "Failed to read {} from {}",
                self.entrypoint,
                self.dir.display()
            )
        })
    }
}

#[derive(Serialize)]
struct TaskSummary<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    desc: Option<&'a str>,
}

/// Print the path of the governing Taskfile
pub fn locate(output: &Output, lookup: &Lookup) -> Result<()> {
    let path = read::find_taskfile(lookup.dir, lookup.entrypoint)?;

    if output.is_json() {
        output.data(&serde_json::json!({ "path": path.display().to_string() }))?;
    } else {
        println!("{}", path.display());
    }
    Ok(())
}

/// List tasks, only described ones unless `all` is set
pub fn list(output: &Output, lookup: &Lookup, all: bool) -> Result<()> {
    let taskfile = lookup.resolve()?;

    let mut tasks: Vec<TaskSummary> = taskfile
        .tasks
        .values()
        .filter(|task| all || task.desc.is_some())
        .map(|task| TaskSummary {
            name: &task.name,
            desc: task.desc.as_deref(),
        })
        .collect();
    tasks.sort_by(|a, b| a.name.cmp(b.name));
    debug!(shown = tasks.len(), total = taskfile.tasks.len(), "Listing tasks");

    if output.is_json() {
        output.data(&tasks)?;
    } else if tasks.is_empty() {
        if all {
            println!("No tasks defined.");
        } else {
            println!("No tasks with a description. Use --all to list every task.");
        }
    } else {
        let width = tasks.iter().map(|t| t.name.len()).max().unwrap_or(0) + 2;
        println!("Available tasks ({}):", tasks.len());
        for task in &tasks {
            println!("* {:<width$}{}", task.name, task.desc.unwrap_or(""));
        }
    }
    Ok(())
}

/// Print one resolved task
pub fn show(output: &Output, lookup: &Lookup, name: &str) -> Result<()> {
    let taskfile = lookup.resolve()?;

    let task = taskfile
        .tasks
        .get(name)
        .ok_or_else(|| anyhow::anyhow!("Task \"{}\" does not exist", name))?;

    output.data(task)
}

/// Print the whole merged Taskfile
pub fn dump(output: &Output, lookup: &Lookup) -> Result<()> {
    let taskfile = lookup.resolve()?;
    output.data(&taskfile)
}
