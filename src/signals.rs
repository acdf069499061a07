//! Park the process until a signal arrives

use std::os::raw::c_int;

use signal_hook::consts::FORBIDDEN;
use signal_hook::iterator::Signals;
use tracing::{debug, info, trace};

use crate::errors::{LaunchError, LaunchResult};

/// Highest signal number the platform delivers, real-time signals included.
#[cfg(any(target_os = "linux", target_os = "android"))]
pub fn highest_signal() -> c_int {
    libc::SIGRTMAX()
}

#[cfg(not(any(target_os = "linux", target_os = "android")))]
pub fn highest_signal() -> c_int {
    31
}

/// Every signal number worth trying to subscribe to.
///
/// Numbers the C runtime reserves for itself (glibc keeps the first two
/// real-time signals) are still listed; registration skips them.
pub fn candidate_signals() -> Vec<c_int> {
    (1..=highest_signal())
        .filter(|sig| !FORBIDDEN.contains(sig))
        .collect()
}

/// Subscribe to every signal a handler can be installed for.
pub fn subscribe_all() -> LaunchResult<Signals> {
    let signals = Signals::new(std::iter::empty::<c_int>()).map_err(LaunchError::Signal)?;

    let mut registered = 0usize;
    for sig in candidate_signals() {
        match signals.add_signal(sig) {
            Ok(()) => registered += 1,
            Err(e) => trace!("skipping signal {}: {}", sig, e),
        }
    }
    if registered == 0 {
        return Err(LaunchError::Signal(std::io::Error::other(
            "no signal could be subscribed",
        )));
    }
    debug!("subscribed to {} signals", registered);
    Ok(signals)
}

/// Block until any catchable signal is delivered, then return it.
///
/// No timeout. The signal is not re-raised.
pub fn wait_for_signal() -> LaunchResult<c_int> {
    let mut signals = subscribe_all()?;
    info!("waiting for a signal");

    // forever() only ends when the handle is closed, which never happens here
    let received = signals
        .forever()
        .next()
        .ok_or_else(|| LaunchError::Signal(std::io::Error::other("signal stream closed")))?;
    debug!("received signal {}", received);
    Ok(received)
}
