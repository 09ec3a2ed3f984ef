//! Pixel Tracker application.
//!
//! The tracker application has a global configuration for the jobs. It's
//! basically a container for other services.
//!
//! The application is responsible for starting the jobs. The tracking data is
//! loaded before, in the [bootstrap](crate::bootstrap::app) stage.
//!
//! Jobs executed always:
//!
//! - HTTP tracker
use std::sync::Arc;

use pixel_tracker_configuration::Configuration;
use tokio::task::JoinHandle;

use crate::bootstrap::jobs::{self, http_tracker};
use crate::core;

/// It starts the application jobs.
///
/// # Errors
///
/// Will return an error if a job can not be started.
pub async fn start(config: &Configuration, tracker: Arc<core::Tracker>) -> Result<Vec<JoinHandle<()>>, jobs::Error> {
    let mut jobs: Vec<JoinHandle<()>> = Vec::new();

    // Start the HTTP tracker
    jobs.push(http_tracker::start_job(&config.http_tracker, tracker).await?);

    Ok(jobs)
}
