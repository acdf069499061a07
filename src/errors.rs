//! Errors raised while launching or waiting

use std::ffi::OsString;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("chdir {}: {source}", dir.display())]
    Chdir {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("exec: {name:?}: executable file not found in $PATH")]
    NotFound { name: OsString },

    #[error("exec: {path:?}: permission denied")]
    NotExecutable { path: PathBuf },

    #[error("exec {}: {source}", path.display())]
    Exec {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot subscribe to signals: {0}")]
    Signal(#[source] std::io::Error),
}

pub type LaunchResult<T> = Result<T, LaunchError>;
