//! Tracker domain services.
//!
//! - [`tracker_factory`]: it builds the core [`Tracker`] from the configuration.
use pixel_tracker_configuration::Configuration;

use crate::core::Tracker;

/// It returns a new tracker building its dependencies.
///
/// The tracker starts empty. Use [`Tracker::load_tracking_data_from_storage`]
/// to load the persisted tracking data.
#[must_use]
pub fn tracker_factory(config: &Configuration) -> Tracker {
    Tracker::new(config)
}
