//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use super::config::GlobalConfig;
use super::output::{Output, OutputFormat};
use super::tasks::Lookup;
use super::{init, logging, tasks};

#[derive(Parser)]
#[command(name = "taskfile")]
#[command(author, version, about = "Locate, read and merge Taskfiles")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory to start searching from
    #[arg(long, short = 'd', global = true, env = "TASKFILE_DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Entrypoint file name (defaults to the configured one, then Taskfile.yml)
    #[arg(long, short = 't', global = true, env = "TASKFILE_ENTRYPOINT")]
    pub taskfile: Option<String>,

    /// Output format (defaults to the configured one, then text)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the path of the Taskfile governing the directory
    Locate,

    /// List tasks of the merged Taskfile
    List {
        /// Include tasks without a description
        #[arg(long, short)]
        all: bool,
    },

    /// Show one task of the merged Taskfile
    Show {
        /// Task name, including its namespace (e.g. docs:serve)
        name: String,
    },

    /// Print the fully merged Taskfile
    Dump,

    /// Create a starter Taskfile.yml
    Init {
        /// Directory to create it in (defaults to --dir)
        path: Option<PathBuf>,
    },
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = GlobalConfig::load()?;
    let format = cli.format.unwrap_or(config.default_format);
    let entrypoint = cli.taskfile.clone().unwrap_or(config.entrypoint);
    let output = Output::new(format);

    debug!(dir = %cli.dir.display(), entrypoint = %entrypoint, ?format, "Starting");

    let lookup = Lookup {
        dir: &cli.dir,
        entrypoint: &entrypoint,
    };

    match cli.command {
        Commands::Locate => tasks::locate(&output, &lookup)?,
        Commands::List { all } => tasks::list(&output, &lookup, all)?,
        Commands::Show { ref name } => tasks::show(&output, &lookup, name)?,
        Commands::Dump => tasks::dump(&output, &lookup)?,
        Commands::Init { ref path } => {
            let target = path.as_ref().unwrap_or(&cli.dir);
            let created = init::init_taskfile(target)?;
            output.success(&format!("Created {}", created.display()));
        }
    }

    debug!("Command completed successfully");
    Ok(())
}
