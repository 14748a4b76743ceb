use crate::domain::Taskfile;

/// Stamps every task with its own key
///
/// Tasks declared without a body were already read as empty tasks, so after
/// this pass every entry can report its name without the enclosing map.
pub fn finalize_tasks(taskfile: &mut Taskfile) {
    for (name, task) in taskfile.tasks.iter_mut() {
        task.name.clone_from(name);
    }
}
