//! Terminal output
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::Colorize;

pub const USAGE: &str = "usage: trampoline <subcommand>

Where subcommand can be:
\tcdexec: Run a command after changing current working directory to the given directory
\twait: Block until any signal is received
";

/// Print usage text to stdout
pub fn usage() {
    println!("{USAGE}");
}

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}
