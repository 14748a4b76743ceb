//! Taskfile CLI - locate, read and merge Taskfiles

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = taskfile_cli::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
