//! # Command-Line Interface
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `locate` | Print the Taskfile governing the directory |
//! | `list` | List tasks of the merged Taskfile |
//! | `show <task>` | Print one merged task |
//! | `dump` | Print the whole merged Taskfile |
//! | `init` | Write a starter Taskfile.yml |
//!
//! ## Output Formats
//!
//! All commands support `--format`:
//! - `text` (default) - Human-readable output, YAML for structured data
//! - `json` - Machine-parseable JSON
//!
//! The default format and entrypoint can also be set in the global
//! config file (see [`GlobalConfig`]).
//!
//! ## Verbose Mode
//!
//! `--verbose` (or `-v`) logs each resolution step to stderr:
//! ```bash
//! taskfile --verbose list
//! ```

mod app;
mod config;
mod init;
mod logging;
mod output;
mod tasks;

pub use app::{run, Cli, Commands};
pub use config::{ConfigError, GlobalConfig, CONFIG_PATH_ENV};
pub use output::{Output, OutputFormat};
