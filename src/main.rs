use std::{env, process};

use tracing::debug;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use trampoline::build_info::{BuildInfo, BUILD_INFO};
use trampoline::cli::commands::execute_command;
use trampoline::cli::{output, Cli, CliError};
use trampoline::exitcode;

fn main() {
    process::exit(run(&BUILD_INFO));
}

fn run(build: &BuildInfo) -> i32 {
    setup_logging();
    debug!("trampoline {}", build);

    let invocation = match Cli::try_parse_invocation(env::args_os()) {
        Ok(invocation) => invocation,
        Err(e) => {
            output::error(&e);
            return exitcode::USAGE;
        }
    };

    match execute_command(invocation) {
        Ok(()) => exitcode::OK,
        Err(CliError::Usage) => {
            output::usage();
            exitcode::USAGE
        }
        Err(e) => {
            output::error(&e);
            e.exit_code()
        }
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default: warnings only).
fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // stdout belongs to the exec'd program
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();
}
