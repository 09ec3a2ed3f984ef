//! The stopped clock. Its time only changes when it's set, and every thread
//! has its own time.
use std::cell::RefCell;

use super::{DurationSinceUnixEpoch, Time};
use crate::shared::clock;

#[allow(clippy::module_name_repetitions)]
pub struct StoppedClock {}

/// Operations to move the stopped clock.
#[allow(clippy::module_name_repetitions)]
pub trait Stopped: Time {
    /// Sets the time for the current thread.
    fn local_set(unix_time: &DurationSinceUnixEpoch);

    /// Goes back to the default time for the current thread.
    fn local_reset();
}

thread_local! {
    static FIXED_TIME: RefCell<DurationSinceUnixEpoch> = RefCell::new(default_fixed_time());
}

/// The Unix Epoch in unit tests.
#[cfg(test)]
fn default_fixed_time() -> DurationSinceUnixEpoch {
    DurationSinceUnixEpoch::ZERO
}

/// The time the application started.
#[cfg(not(test))]
fn default_fixed_time() -> DurationSinceUnixEpoch {
    clock::static_time::TIME_AT_APP_START
        .duration_since(std::time::SystemTime::UNIX_EPOCH)
        .unwrap_or_default()
}

impl Time for clock::Stopped {
    fn now() -> DurationSinceUnixEpoch {
        FIXED_TIME.with(|time| *time.borrow())
    }
}

impl Stopped for clock::Stopped {
    fn local_set(unix_time: &DurationSinceUnixEpoch) {
        FIXED_TIME.with(|time| *time.borrow_mut() = *unix_time);
    }

    fn local_reset() {
        Self::local_set(&default_fixed_time());
    }
}
