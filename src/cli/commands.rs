use std::ffi::OsString;

use tracing::{debug, instrument};

use crate::cli::args::{Commands, Invocation};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::exec::CdExec;
use crate::signals::wait_for_signal;

/// Run the parsed command line.
///
/// `Ok` means the process should exit with [`crate::exitcode::OK`]. A
/// successful `cdexec` never returns.
pub fn execute_command(invocation: Invocation) -> CliResult<()> {
    match invocation {
        Invocation::Missing => Err(CliError::Usage),
        Invocation::Unknown(name) => {
            debug!("unknown subcommand: {:?}", name);
            output::usage();
            Ok(())
        }
        Invocation::Command(Commands::Cdexec { args }) => _cdexec(args),
        Invocation::Command(Commands::Wait { .. }) => _wait(),
    }
}

#[instrument(skip_all)]
fn _cdexec(args: Vec<OsString>) -> CliResult<()> {
    let request = CdExec::from_args(args).ok_or(CliError::Usage)?;
    match request.run()? {}
}

#[instrument]
fn _wait() -> CliResult<()> {
    let signal = wait_for_signal()?;
    debug!("woken by signal {}", signal);
    Ok(())
}
