//! Domain models for Taskfiles
//!
//! Contains the document model, the version gate and the merge rules,
//! without any filesystem access.

mod merge;
mod task;
mod taskfile;
mod vars;
mod version;

pub use merge::{merge, task_name_with_namespace, MergeError, NAMESPACE_SEPARATOR};
pub use task::{Cmd, Dep, Task};
pub use taskfile::{IncludedTaskfile, Taskfile, Tasks};
pub use vars::{Var, Vars};
pub use version::{SchemaBehavior, SchemaVersion, VersionError};
