use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::{MergeError, VersionError};
use crate::template::TemplateError;

/// Everything that can stop a Taskfile from being resolved
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("No Taskfile found at \"{}\". Use \"taskfile init\" to create a new one", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to parse dotenv file {}", path.display())]
    Dotenv {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },

    #[error(transparent)]
    Version(#[from] VersionError),

    #[error("Included Taskfiles can't have includes. Please, move the include to the main Taskfile")]
    IncludedTaskfileHasIncludes,

    #[error("Included Taskfiles can't have dotenv declarations. Please, move the dotenv declaration to the main Taskfile")]
    IncludedTaskfileHasDotenv,

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Merge(#[from] MergeError),
}

impl ReadError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ReadError::Io {
            path: path.into(),
            source,
        }
    }
}
