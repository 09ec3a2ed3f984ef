//! Axum [`handlers`](axum#handlers) for the `POST` request.
//!
//! It returns all the hits recorded for the tracker in the `trackerName` query
//! parameter. The request body is ignored.
use std::sync::Arc;

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use tracing::debug;

use crate::core::Tracker;
use crate::servers::http::v1::extractors::tracker_name::ExtractTrackerName;
use crate::servers::http::v1::responses;

/// It handles the `POST` request.
pub async fn handle(State(tracker): State<Arc<Tracker>>, ExtractTrackerName(tracker_name): ExtractTrackerName) -> Response {
    debug!(target: "HTTP TRACKER", %tracker_name, "http tracker data request");

    match handle_tracker_data(&tracker, &tracker_name).await {
        Ok(record) => record.into_response(),
        Err(error) => error.into_response(),
    }
}

async fn handle_tracker_data(
    tracker: &Arc<Tracker>,
    tracker_name: &str,
) -> Result<responses::record::Record, responses::error::Error> {
    match tracker.get_record(tracker_name).await {
        Some(record) => Ok(responses::record::Record(record)),
        None => Err(responses::error::Error::TrackerNotFound),
    }
}
