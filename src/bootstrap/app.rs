//! Setup for the main pixel tracker application.
//!
//! The [`setup`] only builds the application and its dependencies but it does
//! not start the application. In fact, there is no such thing as the main
//! application process. When the application starts, the only thing it does is
//! starting the jobs. Refer to the [`app`](crate::app) module for more
//! information.
//!
//! Setup steps:
//!
//! 1. Load the global application configuration.
//! 2. Initialize static variables.
//! 3. Initialize logging.
//! 4. Build the core tracker and load the persisted tracking data.
use std::sync::Arc;

use pixel_tracker_configuration::{Configuration, Error};
use tracing::{error, info};

use super::config::initialize_configuration;
use crate::bootstrap;
use crate::core::services::tracker_factory;
use crate::core::Tracker;
use crate::shared::clock::static_time;

/// It loads the configuration from the environment and builds the main
/// domain [`Tracker`] struct.
///
/// # Errors
///
/// Will return an error if the configuration can not be loaded.
pub async fn setup() -> Result<(Arc<Configuration>, Arc<Tracker>), Error> {
    let configuration = Arc::new(initialize_configuration()?);

    let tracker = initialize_with_configuration(&configuration).await;

    Ok((configuration, tracker))
}

/// It initializes the application with the given configuration.
///
/// The configuration may be obtained from the environment (via config file or env vars).
pub async fn initialize_with_configuration(configuration: &Arc<Configuration>) -> Arc<Tracker> {
    initialize_static();
    initialize_logging(configuration);
    Arc::new(initialize_tracker(configuration).await)
}

/// It initializes the application static values.
///
/// These values are accessible throughout the entire application:
///
/// - The time when the application started.
pub fn initialize_static() {
    // Set the time of the pixel tracker app starting
    lazy_static::initialize(&static_time::TIME_AT_APP_START);
}

/// It builds the domain tracker and loads the persisted tracking data.
///
/// The tracking data is loaded fail-soft: if the storage can not be read or
/// parsed the error is logged and the tracker starts with no data. The
/// storage is overwritten with the new data on the next hit.
pub async fn initialize_tracker(config: &Arc<Configuration>) -> Tracker {
    let tracker = tracker_factory(config);

    match tracker.load_tracking_data_from_storage().await {
        Ok(()) => {
            let trackers = tracker.number_of_trackers().await;
            info!(target: "BOOTSTRAP", path = %config.storage.path, trackers, "tracking data loaded");
        }
        Err(err) => error!(
            target: "BOOTSTRAP",
            path = %config.storage.path,
            %err,
            "unable to load the tracking data, starting with no data"
        ),
    }

    tracker
}

/// It initializes the log threshold, format and channel.
///
/// See [the logging setup](crate::bootstrap::logging::setup) for more info about logging.
pub fn initialize_logging(config: &Arc<Configuration>) {
    bootstrap::logging::setup(config);
}
