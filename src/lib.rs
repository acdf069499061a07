//! Process-launch helper.
//!
//! `cdexec` changes the working directory and replaces the process image with
//! a command found on `PATH`. `wait` parks the process until any signal is
//! delivered.

pub mod build_info;
pub mod cli;
pub mod errors;
pub mod exec;
pub mod exitcode;
pub mod lookup;
pub mod signals;
pub mod util;

pub use build_info::{BuildInfo, BUILD_INFO};
