use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("at least the first argument should be a path to shader files")]
    Usage,
    #[error("could not read shader source directory {path:?}: {source}")]
    ReadDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not create output directory {path:?}: {source}")]
    OutputDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Why a single compiler invocation did not produce its artifact.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("could not run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("compiler exited with {status}: {stderr}")]
    Failed {
        status: ExitStatus,
        stdout: String,
        stderr: String,
    },
    #[error("output directory {0:?} is unavailable")]
    OutputDirectoryUnavailable(PathBuf),
}

impl CompileError {
    /// Exit code of the compiler, if it ran and exited normally.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            CompileError::Failed { status, .. } => status.code(),
            _ => None,
        }
    }
}
