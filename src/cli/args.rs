//! CLI argument definitions using clap
//!
//! `argv[1]` is matched literally against the subcommand names before clap
//! sees anything, so a leading `-d` or `-h` is just an unknown subcommand.
//! Everything after the subcommand is handed over verbatim: an explicit `--`
//! is inserted so clap never interprets those values, a literal `--` among
//! them included.

use std::ffi::OsString;

use clap::{Parser, Subcommand};

/// Change directory then exec a command, or park until a signal arrives
#[derive(Parser, Debug)]
#[command(name = "trampoline")]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run a command after changing current working directory to the given directory
    #[command(disable_help_flag = true)]
    Cdexec {
        /// <dir> <cmd> [args...]
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<OsString>,
    },

    /// Block until any signal is received
    #[command(disable_help_flag = true)]
    Wait {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
        ignored: Vec<OsString>,
    },
}

/// What `argv[1]` asked for.
#[derive(Debug, PartialEq, Eq)]
pub enum Invocation {
    /// No subcommand at all
    Missing,
    /// `argv[1]` names no subcommand
    Unknown(OsString),
    Command(Commands),
}

const SUBCOMMANDS: &[&str] = &["cdexec", "wait"];

impl Cli {
    /// Parse `args` (program name first).
    pub fn try_parse_invocation<I, T>(args: I) -> Result<Invocation, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut args = args.into_iter().map(Into::<OsString>::into);
        let program = args.next().unwrap_or_else(|| OsString::from("trampoline"));
        let Some(subcommand) = args.next() else {
            return Ok(Invocation::Missing);
        };
        if !SUBCOMMANDS.iter().any(|name| subcommand == *name) {
            return Ok(Invocation::Unknown(subcommand));
        }

        let argv = [program, subcommand, OsString::from("--")]
            .into_iter()
            .chain(args);
        let cli = Self::try_parse_from(argv)?;
        Ok(Invocation::Command(cli.command))
    }
}
