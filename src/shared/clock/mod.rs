//! Time source for the recorded hits.
//!
//! Hits are stamped with [`CurrentClock::now`](crate::CurrentClock). The
//! binary uses the [`Working`] clock (system time). Unit tests use the
//! [`Stopped`] clock so the time of a hit is known in advance: it's the Unix
//! Epoch unless the test moves it.
//!
//! The time is a [`DurationSinceUnixEpoch`] and it's stored as an ISO 8601
//! string, see [`conv`]:
//!
//! ```text
//! 1714558830.456  ->  2024-05-01T10:20:30.456Z
//! ```
pub mod conv;
pub mod static_time;
pub mod stopped;
pub mod working;

use std::marker::PhantomData;
use std::time::Duration;

use self::stopped::StoppedClock;
use self::working::WorkingClock;

/// Duration since the Unix Epoch.
pub type DurationSinceUnixEpoch = Duration;

/// A clock. The type parameter selects where the time comes from.
#[derive(Debug)]
pub struct Clock<T> {
    source: PhantomData<T>,
}

/// Reads the system time.
pub type Working = Clock<WorkingClock>;

/// Returns a fixed time that tests can set.
pub type Stopped = Clock<StoppedClock>;

pub trait Time: Sized {
    fn now() -> DurationSinceUnixEpoch;
}
