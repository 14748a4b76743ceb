//! Taskfile CLI - locate, read and merge Taskfiles
//!
//! Finds the Taskfile governing a directory, folds in its dotenv files,
//! included Taskfiles and (for old schema versions) per-platform
//! Taskfiles, and hands back one merged task graph.
//!
//! ```no_run
//! let taskfile = taskfile_cli::read::taskfile(".", taskfile_cli::read::DEFAULT_ENTRYPOINT)?;
//! for name in taskfile.task_names() {
//!     println!("{name}");
//! }
//! # Ok::<(), taskfile_cli::read::ReadError>(())
//! ```

pub mod cli;
pub mod domain;
pub mod read;
pub mod template;

pub use domain::{IncludedTaskfile, Task, Taskfile, Var, Vars};
pub use read::ReadError;
