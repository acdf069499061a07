//! Process exit codes

/// Successful termination, also used when an unknown subcommand prints usage
pub const OK: i32 = 0;

/// Missing subcommand or missing `cdexec` arguments
pub const USAGE: i32 = 1;

/// Directory change, executable lookup, exec or signal setup failed
pub const OSERR: i32 = 255;
