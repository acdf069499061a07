//! Executable lookup along `PATH`
//!
//! A name containing `/` is checked as given, relative to the current
//! directory. Any other name is searched in each `PATH` entry in order, an
//! empty entry standing for the current directory. An unset or empty `PATH`
//! searches nothing. The first regular file with an execute bit set wins.

use std::ffi::OsStr;
use std::fs;
use std::os::unix::ffi::OsStrExt;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::errors::{LaunchError, LaunchResult};

/// Resolve `name` using the process `PATH`.
pub fn look_path(name: &OsStr) -> LaunchResult<PathBuf> {
    let path_var = std::env::var_os("PATH");
    look_path_in(name, path_var.as_deref())
}

/// Resolve `name` against an explicit search path value.
pub fn look_path_in(name: &OsStr, path_var: Option<&OsStr>) -> LaunchResult<PathBuf> {
    if name.is_empty() {
        return Err(LaunchError::NotFound {
            name: name.to_os_string(),
        });
    }

    if name.as_bytes().contains(&b'/') {
        let candidate = PathBuf::from(name);
        return match probe(&candidate) {
            Probe::Executable => Ok(candidate),
            Probe::NotExecutable => Err(LaunchError::NotExecutable { path: candidate }),
            Probe::Missing => Err(LaunchError::NotFound {
                name: name.to_os_string(),
            }),
        };
    }

    // Remembered so a non-executable hit is reported only when nothing better exists
    let mut denied: Option<PathBuf> = None;
    let path_var = path_var.filter(|value| !value.is_empty()).unwrap_or_default();
    for dir in std::env::split_paths(path_var) {
        let dir = if dir.as_os_str().is_empty() {
            PathBuf::from(".")
        } else {
            dir
        };
        let candidate = dir.join(name);
        trace!("probing {:?}", candidate);
        match probe(&candidate) {
            Probe::Executable => {
                debug!("resolved {:?} to {:?}", name, candidate);
                return Ok(candidate);
            }
            Probe::NotExecutable => {
                denied.get_or_insert(candidate);
            }
            Probe::Missing => {}
        }
    }

    match denied {
        Some(path) => Err(LaunchError::NotExecutable { path }),
        None => Err(LaunchError::NotFound {
            name: name.to_os_string(),
        }),
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Probe {
    Executable,
    NotExecutable,
    Missing,
}

fn probe(path: &Path) -> Probe {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Probe::NotExecutable,
        Ok(meta) if meta.permissions().mode() & 0o111 != 0 => Probe::Executable,
        Ok(_) => Probe::NotExecutable,
        Err(_) => Probe::Missing,
    }
}
