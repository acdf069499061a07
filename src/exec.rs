//! Change directory, then replace the process image

use std::convert::Infallible;
use std::env;
use std::ffi::OsString;
use std::os::unix::process::CommandExt;
use std::path::PathBuf;
use std::process::Command;

use tracing::{debug, instrument};

use crate::errors::{LaunchError, LaunchResult};
use crate::lookup::look_path;

/// Arguments of `cdexec <dir> <cmd> [args...]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CdExec {
    /// Directory to change into
    pub dir: PathBuf,
    /// Command name as supplied; becomes `argv[0]` of the new image
    pub program: OsString,
    /// Remaining arguments for the command
    pub args: Vec<OsString>,
}

impl CdExec {
    /// Split raw `cdexec` arguments. Returns `None` with fewer than two.
    pub fn from_args(args: Vec<OsString>) -> Option<Self> {
        let mut args = args.into_iter();
        let dir = PathBuf::from(args.next()?);
        let program = args.next()?;
        Some(Self {
            dir,
            program,
            args: args.collect(),
        })
    }

    /// Change into `dir`, resolve `program` and exec it.
    ///
    /// Only returns on failure. On success the current process is replaced:
    /// same PID, inherited environment, file descriptors and stdio.
    ///
    /// The new image starts with an empty blocked-signal mask and SIGPIPE at
    /// its default action, as std's `exec` arranges. Without that reset the
    /// SIG_IGN the Rust runtime installs for SIGPIPE would leak into the
    /// command. Every other disposition follows the usual exec rules:
    /// handled signals revert to default, ignored ones stay ignored.
    #[instrument(skip(self), fields(dir = ?self.dir, program = ?self.program))]
    pub fn run(&self) -> LaunchResult<Infallible> {
        env::set_current_dir(&self.dir).map_err(|source| LaunchError::Chdir {
            dir: self.dir.clone(),
            source,
        })?;
        debug!("changed directory to {:?}", self.dir);

        let binary = look_path(&self.program)?;
        debug!("exec {:?} as {:?} with {} args", binary, self.program, self.args.len());

        let source = Command::new(&binary)
            .arg0(&self.program)
            .args(&self.args)
            .exec();
        Err(LaunchError::Exec {
            path: binary,
            source,
        })
    }
}
