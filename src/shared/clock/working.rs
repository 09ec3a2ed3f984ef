use std::time::SystemTime;

use super::{DurationSinceUnixEpoch, Time, Working};

#[allow(clippy::module_name_repetitions)]
pub struct WorkingClock;

impl Time for Working {
    fn now() -> DurationSinceUnixEpoch {
        // A system clock set before 1970 yields the epoch.
        SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .unwrap_or_default()
    }
}
